mod common;

#[cfg(test)]
pub mod content_tests {
    use chrono::Weekday;
    use serde_json::json;

    use super::common::*;

    use saffron::common::ContentError;
    use saffron::content::*;

    #[test]
    fn test_validate_all_success() {
        assert_eq!(validate_all(), Ok(()));
    }

    #[test]
    fn test_menu_slugs_are_unique_and_findable() {
        for menu in MENUS.iter() {
            let found = find_menu(&menu.slug).expect("shipped menu should be findable");
            assert_eq!(found.menu_name, menu.menu_name);
        }
    }

    #[test]
    fn test_find_menu_fails_on_unknown_slug() {
        assert_eq!(
            find_menu("brunch").err(),
            Some(ContentError::UnknownMenu("brunch".to_string()))
        );
    }

    #[test]
    fn test_unknown_menu_maps_to_not_found_status() {
        let error = find_menu("brunch").err().expect("unknown slug");

        assert_eq!(error.http_status(), 404);
        assert_eq!(ContentError::Empty("menu name".to_string()).http_status(), 500);
    }

    #[test]
    fn test_every_shipped_item_has_name_and_price() {
        for item in MENUS.iter().flat_map(|m| m.items()) {
            assert!(!item.name.trim().is_empty());
            assert!(!item.price.parts().is_empty(), "{} has no price", item.name);
        }
    }

    #[test]
    fn test_drinks_menu_uses_tiered_prices() {
        let drinks = find_menu("drinks").expect("drinks menu");
        assert!(drinks.items().any(|i| matches!(i.price, Price::Tiered { .. })));
    }

    #[test]
    fn test_menu_from_json_success() {
        let menu = Menu::from_json(MENU_JSON).expect("valid menu");

        assert_eq!(menu.slug, "bar-bites");
        assert_eq!(menu.categories.len(), 2);
        assert_eq!(menu.categories[0].category_notes, vec!["Served from 5pm".to_string()]);
        assert_eq!(menu.categories[0].vegetarian_count(), 1);

        let items: Vec<&MenuItem> = menu.items().collect();
        assert_eq!(items.len(), 4);
        assert!(items[0].vegetarian);
        assert!(!items[1].vegetarian);
        assert_eq!(items[1].description, "");
        assert_eq!(items[2].price, Price::tiered(Some("£7.00"), Some("£27.00")));
        assert_eq!(items[3].price, Price::tiered(None, Some("£34.00")));
    }

    #[test]
    fn test_menu_from_json_fails_on_legacy_vegetarian_field() {
        assert_eq!(
            Menu::from_json(LEGACY_MENU_JSON),
            Err(ContentError::LegacyVegetarianField {
                menu: "Old Menu".to_string(),
                item: "Dal Tadka".to_string(),
            })
        );
    }

    #[test]
    fn test_menu_from_json_fails_on_unknown_field() {
        let json = json!({
            "menu_name": "X",
            "slug": "x",
            "categories": [{ "category_name": "A", "items": [{ "name": "B", "price": "£1", "spicy": true }] }]
        });

        assert!(matches!(Menu::from_json(&json.to_string()), Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_menu_validate_fails_on_empty_category() {
        let menu = Menu::new("Empty", "empty", vec![MenuCategory::new("Nothing", vec![])]);
        assert!(matches!(menu.validate(), Err(ContentError::Empty(_))));
    }

    #[test]
    fn test_menu_validate_fails_on_empty_tiered_price() {
        let item = MenuItem::new("House Red", Price::tiered(None, None), "");
        let menu = Menu::new("Wine", "wine", vec![MenuCategory::new("Red", vec![item])]);

        assert_eq!(
            menu.validate(),
            Err(ContentError::EmptyTieredPrice("House Red".to_string()))
        );
    }

    #[test]
    fn test_menu_item_serializes_canonical_vegetarian() {
        let value = serde_json::to_value(get_seed_item_veg()).expect("serialize");

        assert_eq!(value["vegetarian"], json!(true));
        assert!(value.get("is_vegetarian").is_none());
        assert_eq!(value["price"], json!("£8.50"));
    }

    #[test]
    fn test_price_display() {
        assert_eq!(get_seed_item_veg().price.to_string(), "£8.50");
        assert_eq!(get_seed_item_wine().price.to_string(), "Glass £7.50 / Bottle £29.00");
        assert_eq!(Price::tiered(None, Some("£42.00")).to_string(), "Bottle £42.00");
    }

    #[test]
    fn test_course_choice_has_options_and_no_item() {
        let course = get_seed_choice_course();

        assert_eq!(course.selection.selection_type(), "choice");
        assert_eq!(course.selection.options().map(<[MenuOption]>::len), Some(2));
        assert!(course.selection.item().is_none());
    }

    #[test]
    fn test_course_fixed_has_item_and_no_options() {
        let course = get_seed_fixed_course();

        assert_eq!(course.selection.selection_type(), "fixed");
        assert!(course.selection.options().is_none());
        assert_eq!(course.selection.item().map(|i| i.name.as_str()), Some("Kheer"));
    }

    #[test]
    fn test_course_serializes_flat_with_selection_type() {
        let choice = serde_json::to_value(get_seed_choice_course()).expect("serialize");
        assert_eq!(choice["selection_type"], json!("choice"));
        assert!(choice["options"].is_array());
        assert!(choice.get("item").is_none());

        let fixed = serde_json::to_value(get_seed_fixed_course()).expect("serialize");
        assert_eq!(fixed["selection_type"], json!("fixed"));
        assert_eq!(fixed["item"]["name"], json!("Kheer"));
        assert!(fixed.get("options").is_none());
    }

    #[test]
    fn test_set_lunch_from_json_success() {
        let courses = json!([
            {
                "course_number": 1,
                "course_name": "Starter",
                "selection_type": "choice",
                "options": [{ "name": "Onion Bhaji", "vegetarian": true }]
            },
            {
                "course_number": 2,
                "course_name": "Dessert",
                "selection_type": "fixed",
                "item": { "name": "Kheer" }
            }
        ]);

        let lunch = SetLunchMenu::from_json(&set_lunch_json(&courses.to_string())).expect("valid");

        assert_eq!(lunch.courses.len(), 2);
        assert!(lunch.courses[0].selection.options().is_some());
        assert!(lunch.courses[1].selection.item().is_some());
        assert_eq!(
            lunch.included_sides.for_weekday(Weekday::Wed).map(|d| d.dal.as_str()),
            Some("Dal Makhani")
        );
    }

    #[test]
    fn test_set_lunch_from_json_fails_on_choice_without_options() {
        let courses = json!([
            { "course_number": 1, "course_name": "Main", "selection_type": "choice", "options": [] }
        ]);

        assert_eq!(
            SetLunchMenu::from_json(&set_lunch_json(&courses.to_string())),
            Err(ContentError::NoCourseOptions("Main".to_string()))
        );
    }

    #[test]
    fn test_set_lunch_from_json_fails_on_choice_with_item() {
        let courses = json!([
            {
                "course_number": 1,
                "course_name": "Main",
                "selection_type": "choice",
                "options": [{ "name": "Dal" }],
                "item": { "name": "Biryani" }
            }
        ]);

        assert_eq!(
            SetLunchMenu::from_json(&set_lunch_json(&courses.to_string())),
            Err(ContentError::MixedCourseSelection {
                course: "Main".to_string(),
                field: "item",
            })
        );
    }

    #[test]
    fn test_set_lunch_from_json_fails_on_fixed_with_options() {
        let courses = json!([
            {
                "course_number": 3,
                "course_name": "Dessert",
                "selection_type": "fixed",
                "item": { "name": "Kheer" },
                "options": [{ "name": "Kulfi" }]
            }
        ]);

        assert!(matches!(
            SetLunchMenu::from_json(&set_lunch_json(&courses.to_string())),
            Err(ContentError::MixedCourseSelection { field: "options", .. })
        ));
    }

    #[test]
    fn test_set_lunch_from_json_fails_on_fixed_without_item() {
        let courses = json!([
            { "course_number": 3, "course_name": "Dessert", "selection_type": "fixed" }
        ]);

        assert!(matches!(
            SetLunchMenu::from_json(&set_lunch_json(&courses.to_string())),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_set_lunch_from_json_fails_on_legacy_vegetarian_option() {
        let courses = json!([
            {
                "course_number": 1,
                "course_name": "Starter",
                "selection_type": "choice",
                "options": [
                    { "name": "Onion Bhaji", "vegetarian": true },
                    { "name": "Chicken 65", "is_vegetarian": false }
                ]
            }
        ]);

        assert_eq!(
            SetLunchMenu::from_json(&set_lunch_json(&courses.to_string())),
            Err(ContentError::LegacyVegetarianField {
                menu: "Set Lunch".to_string(),
                item: "Chicken 65".to_string(),
            })
        );
    }

    #[test]
    fn test_set_lunch_from_json_fails_on_legacy_vegetarian_course() {
        let courses = json!([
            {
                "course_number": 3,
                "course_name": "Dessert",
                "selection_type": "fixed",
                "item": { "name": "Kheer" },
                "is_vegetarian": true
            }
        ]);

        assert_eq!(
            SetLunchMenu::from_json(&set_lunch_json(&courses.to_string())),
            Err(ContentError::LegacyVegetarianField {
                menu: "Set Lunch".to_string(),
                item: "Dessert".to_string(),
            })
        );
    }

    #[test]
    fn test_set_lunch_from_json_fails_on_unknown_course_field() {
        let courses = json!([
            {
                "course_number": 3,
                "course_name": "Dessert",
                "selection_type": "fixed",
                "item": { "name": "Kheer" },
                "spicy": 3
            }
        ]);

        assert_eq!(
            SetLunchMenu::from_json(&set_lunch_json(&courses.to_string())),
            Err(ContentError::UnknownCourseField {
                course: "Dessert".to_string(),
                field: "spicy".to_string(),
            })
        );
    }

    #[test]
    fn test_included_sides_closed_at_weekend() {
        let sides = &SET_LUNCH.included_sides;

        assert!(sides.for_weekday(Weekday::Mon).is_some());
        assert!(sides.for_weekday(Weekday::Fri).is_some());
        assert!(sides.for_weekday(Weekday::Sat).is_none());
        assert!(sides.for_weekday(Weekday::Sun).is_none());
        assert_eq!(sides.days()[0].0, Weekday::Mon);
    }

    #[test]
    fn test_testimonial_stars() {
        assert_eq!(Testimonial::new("Lovely", "A", "Guest", 4).stars(), "★★★★☆");
        assert_eq!(Testimonial::new("Lovely", "A", "Guest", 5).stars(), "★★★★★");
    }

    #[test]
    fn test_testimonial_validate_fails_on_rating_out_of_range() {
        for rating in [0, 6] {
            assert_eq!(
                Testimonial::new("Hmm", "B", "Guest", rating).validate(),
                Err(ContentError::RatingOutOfRange {
                    author: "B".to_string(),
                    rating,
                })
            );
        }
    }

    #[test]
    fn test_restaurant_contact_links() {
        assert_eq!(RESTAURANT.phone_href(), "tel:02079460321");
        assert!(RESTAURANT.email_href().starts_with("mailto:"));
    }
}
