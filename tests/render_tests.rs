mod common;

#[cfg(all(test, feature = "ssr"))]
pub mod render_tests {
    use leptos::prelude::*;

    use super::common::*;

    use saffron::common::ContentError;
    use saffron::content::{find_menu, MenuCategory};
    use saffron::device::{DetectionState, DeviceClass, DeviceDetection};
    use saffron::frontend::components::*;

    fn render_with<F, V>(detection: DetectionState, f: F) -> String
    where
        F: FnOnce() -> V,
        V: IntoView,
    {
        let owner = Owner::new();
        owner.set();
        provide_context(DeviceDetection::fixed(detection));
        f().into_view().to_html()
    }

    fn responsive_views() -> impl IntoView {
        view! {
            <Responsive
                mobile=|| view! { <p>"mobile view"</p> }
                desktop=|| view! { <p>"desktop view"</p> }
                fallback=|| view! { <p>"loading view"</p> }
            />
        }
    }

    fn shipped_category() -> MenuCategory {
        let menu = find_menu("soul-food").expect("soul-food menu");
        menu.categories[0].clone()
    }

    /// Every item appears exactly once as a card, in display order.
    fn assert_items_in_order(html: &str, category: &MenuCategory) {
        assert_eq!(html.matches("class=\"menu-item ").count(), category.items.len());

        let mut last = 0;
        for item in &category.items {
            let name = item
                .name
                .replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('>', "&gt;");
            let heading = format!(">{name}</h3>");
            let at = html[last..]
                .find(&heading)
                .unwrap_or_else(|| panic!("{} missing or out of order", item.name));
            last += at + heading.len();
        }
    }

    #[test]
    fn test_menu_item_card_renders_name_price_and_badge() {
        let html = render_with(DetectionState::Pending, || {
            view! { <MenuItemCard item=get_seed_item_veg()/> }
        });

        assert!(html.contains("Paneer Tikka"));
        assert!(html.contains("£8.50"));
        assert!(html.contains("data-vegetarian=\"true\""));
        assert!(html.contains("diet-veg"));
        assert!(html.contains("mint chutney"));
    }

    #[test]
    fn test_menu_item_card_renders_glass_and_bottle() {
        let html = render_with(DetectionState::Pending, || {
            view! { <MenuItemCard item=get_seed_item_wine()/> }
        });

        assert!(html.contains("Glass"));
        assert!(html.contains("£7.50"));
        assert!(html.contains("Bottle"));
        assert!(html.contains("£29.00"));
        assert!(html.contains("diet-non-veg"));
        assert!(!html.contains("menu-item-description"));
    }

    #[test]
    fn test_menu_category_grid_renders_every_item_in_order() {
        let category = shipped_category();
        let expected = category.clone();
        let html = render_with(DetectionState::Detected(DeviceClass::Desktop), move || {
            view! { <MenuCategoryGrid category=category/> }
        });

        assert!(html.contains(&expected.category_name));
        assert_items_in_order(&html, &expected);
    }

    #[test]
    fn test_menu_category_accordion_renders_every_item_in_order() {
        let category = shipped_category();
        let expected = category.clone();
        let html = render_with(DetectionState::Detected(DeviceClass::Mobile), move || {
            view! { <MenuCategoryAccordion category=category open=true/> }
        });

        assert!(html.contains("<details"));
        assert!(html.contains(&format!("{} dishes", expected.items.len())));
        assert_items_in_order(&html, &expected);
    }

    #[test]
    fn test_responsive_renders_fallback_while_pending() {
        let html = render_with(DetectionState::Pending, responsive_views);

        assert!(html.contains("loading view"));
        assert!(!html.contains("mobile view"));
        assert!(!html.contains("desktop view"));
    }

    #[test]
    fn test_responsive_renders_only_mobile_view() {
        let html = render_with(DetectionState::Detected(DeviceClass::Mobile), responsive_views);

        assert!(html.contains("mobile view"));
        assert!(!html.contains("desktop view"));
        assert!(!html.contains("loading view"));
    }

    #[test]
    fn test_responsive_renders_only_desktop_view() {
        let html = render_with(DetectionState::Detected(DeviceClass::Desktop), responsive_views);

        assert!(html.contains("desktop view"));
        assert!(!html.contains("mobile view"));
    }

    #[test]
    fn test_responsive_tablet_without_tablet_view_uses_desktop() {
        let html = render_with(DetectionState::Detected(DeviceClass::Tablet), responsive_views);

        assert!(html.contains("desktop view"));
    }

    #[test]
    fn test_error_boundary_shows_panel_on_failing_child() {
        let html = render_with(DetectionState::Pending, || {
            view! {
                <PageErrorBoundary>
                    {|| Err::<String, _>(ContentError::UnknownMenu("brunch".to_string()))}
                </PageErrorBoundary>
            }
        });

        assert!(html.contains("Something went wrong"));
        assert!(html.contains("Try Again"));
        assert!(html.contains("role=\"alert\""));
    }

    #[test]
    fn test_error_boundary_renders_healthy_child() {
        let html = render_with(DetectionState::Pending, || {
            view! {
                <PageErrorBoundary>
                    {|| Ok::<_, ContentError>(view! { <p>"all good"</p> })}
                </PageErrorBoundary>
            }
        });

        assert!(html.contains("all good"));
        assert!(!html.contains("Something went wrong"));
    }

    #[test]
    fn test_retry_clears_errors_and_reruns_child() {
        let owner = Owner::new();
        owner.set();

        let errors = ArcRwSignal::new(Errors::default());
        errors.update(|e| {
            e.insert_with_default_key(ContentError::UnknownMenu("brunch".to_string()));
        });
        let attempt = RwSignal::new(0u32);

        // Fails on the first attempt only, like a transient content error.
        let child = move || match attempt.get() {
            0 => Err(ContentError::UnknownMenu("brunch".to_string())),
            _ => Ok(view! { <p>"recovered"</p> }.to_html()),
        };
        assert!(child().is_err());

        retry(&errors, attempt);

        assert!(errors.with_untracked(|e| e.iter().next().is_none()));
        assert_eq!(attempt.get_untracked(), 1);
        assert!(child().is_ok_and(|html| html.contains("recovered")));
    }

    #[test]
    fn test_hero_media_fallback_hides_video() {
        assert!(HeroMedia::default().shows_video());
        assert!(!HeroMedia::Fallback.shows_video());
    }
}
