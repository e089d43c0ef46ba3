use std::time::Duration;

use saffron::content::{Course, FixedMenuItem, MenuItem, MenuOption, Price};

pub const IPHONE_SAFARI: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";
pub const ANDROID_CHROME: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Mobile Safari/537.36";
pub const IPAD_SAFARI: &str = "Mozilla/5.0 (iPad; CPU OS 17_4 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Mobile/15E148 Safari/604.1";
pub const DESKTOP_CHROME: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
pub const DESKTOP_FIREFOX: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:125.0) Gecko/20100101 Firefox/125.0";

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

pub fn get_seed_item_veg() -> MenuItem {
    MenuItem::new(
        "Paneer Tikka",
        Price::flat("£8.50"),
        "Charred paneer, peppers and onion, mint chutney",
    )
    .vegetarian()
}

pub fn get_seed_item_wine() -> MenuItem {
    MenuItem::new(
        "Malbec, Mendoza",
        Price::tiered(Some("£7.50"), Some("£29.00")),
        "",
    )
}

pub fn get_seed_choice_course() -> Course {
    Course::choice(
        1,
        "Starter",
        vec![
            MenuOption::new("Onion Bhaji", "Crisp gram flour fritters").vegetarian(),
            MenuOption::new("Chicken 65", "Fried chilli chicken"),
        ],
    )
}

pub fn get_seed_fixed_course() -> Course {
    Course::fixed(
        3,
        "Dessert",
        FixedMenuItem {
            name: "Kheer".to_string(),
            description: "Cardamom rice pudding".to_string(),
        },
    )
}

pub const MENU_JSON: &str = r#"{
    "menu_name": "Bar Bites",
    "slug": "bar-bites",
    "categories": [
        {
            "category_name": "Small Plates",
            "category_notes": ["Served from 5pm"],
            "items": [
                { "name": "Samosa Chaat", "price": "£6.00", "description": "Chickpeas, yoghurt, tamarind", "vegetarian": true },
                { "name": "Lamb Seekh", "price": "£7.50" }
            ]
        },
        {
            "category_name": "Wine",
            "items": [
                { "name": "Rioja", "price": { "glass": "£7.00", "bottle": "£27.00" } },
                { "name": "Crémant", "price": { "bottle": "£34.00" } }
            ]
        }
    ]
}"#;

pub const LEGACY_MENU_JSON: &str = r#"{
    "menu_name": "Old Menu",
    "slug": "old",
    "categories": [
        {
            "category_name": "Mains",
            "items": [
                { "name": "Dal Tadka", "price": "£9.00", "is_vegetarian": true }
            ]
        }
    ]
}"#;

pub fn set_lunch_json(courses: &str) -> String {
    format!(
        r#"{{
    "title": "Set Lunch",
    "price": "£16.95",
    "availability": "Monday to Friday, 12pm to 3pm",
    "courses": {courses},
    "included_sides": {{
        "monday": {{ "vegetable": "Aloo Gobi", "dal": "Tadka Dal", "rice": "Jeera Rice" }},
        "tuesday": {{ "vegetable": "Bhindi Masala", "dal": "Chana Dal", "rice": "Pilau" }},
        "wednesday": {{ "vegetable": "Saag Aloo", "dal": "Dal Makhani", "rice": "Lemon Rice" }},
        "thursday": {{ "vegetable": "Baingan Bharta", "dal": "Moong Dal", "rice": "Steamed Basmati" }},
        "friday": {{ "vegetable": "Mattar Paneer", "dal": "Sambar", "rice": "Coconut Rice" }}
    }}
}}"#
    )
}
