use askama::Template;

use crate::content::{ChangeFrequency, MENUS, NAV_LINKS};
use crate::web::helpers::absolute_url;

pub struct SitemapEntry {
    pub loc: String,
    pub changefreq: ChangeFrequency,
}

#[derive(Template)]
#[template(path = "sitemap.xml")]
pub struct SitemapTemplate {
    pub entries: Vec<SitemapEntry>,
}

impl SitemapTemplate {
    /// Every navigable page followed by each menu page.
    pub fn for_origin(origin: &str) -> Self {
        let pages = NAV_LINKS.iter().map(|link| SitemapEntry {
            loc: absolute_url(origin, link.path),
            changefreq: link.change_frequency,
        });
        let menus = MENUS.iter().map(|menu| SitemapEntry {
            loc: absolute_url(origin, &format!("/menu/{}", menu.slug)),
            changefreq: ChangeFrequency::Weekly,
        });

        Self {
            entries: pages.chain(menus).collect(),
        }
    }
}

#[derive(Template)]
#[template(path = "robots.txt")]
pub struct RobotsTemplate {
    pub sitemap_url: String,
    /// Anything but production asks crawlers to stay away.
    pub allow: bool,
}
