#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::middleware::{Compress, Logger};
    use actix_web::web::Data;
    use actix_web::{App, HttpServer};
    use leptos::config::get_configuration;
    use leptos_actix::{LeptosRoutes, generate_route_list};

    use saffron::common::SiteConfig;
    use saffron::frontend::{App as SiteApp, shell};
    use saffron::web::{AppState, SecurityHeaders};

    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let config = SiteConfig::from_env().map_err(io_error)?;
    saffron::content::validate_all().map_err(io_error)?;

    let conf = get_configuration(None).map_err(io_error)?;
    let addr = conf.leptos_options.site_addr;
    let state = Data::new(AppState::new(config.clone()));
    let security = SecurityHeaders::for_environment(config.environment);

    log::info!(
        "serving {} ({}) on http://{}",
        config.public_origin,
        config.environment,
        addr
    );

    HttpServer::new(move || {
        let routes = generate_route_list(SiteApp);
        let leptos_options = &conf.leptos_options;
        let site_root = leptos_options.site_root.to_string();

        App::new()
            .wrap(security)
            .wrap(Compress::default())
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(saffron::web::configure)
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .service(Files::new("/assets", format!("{site_root}/assets")))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(feature = "ssr")]
fn io_error<E: std::fmt::Display>(e: E) -> std::io::Error {
    log::error!("startup failed: {e}");
    std::io::Error::other(e.to_string())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {}
