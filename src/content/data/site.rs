use crate::content::{
    ChangeFrequency, ChefProfile, Course, DailyMenu, Event, FixedMenuItem, HeroMediaSource,
    IncludedSides, MenuOption, NavLink, Offer, OpeningHours, RestaurantInfo, SetLunchMenu,
    Testimonial,
};

pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        label: "Home",
        path: "/",
        change_frequency: ChangeFrequency::Weekly,
    },
    NavLink {
        label: "Menu",
        path: "/menu",
        change_frequency: ChangeFrequency::Weekly,
    },
    NavLink {
        label: "Set Lunch",
        path: "/set-lunch",
        change_frequency: ChangeFrequency::Daily,
    },
    NavLink {
        label: "Events",
        path: "/events",
        change_frequency: ChangeFrequency::Weekly,
    },
    NavLink {
        label: "Offers",
        path: "/offers",
        change_frequency: ChangeFrequency::Weekly,
    },
    NavLink {
        label: "Our Chef",
        path: "/chef",
        change_frequency: ChangeFrequency::Monthly,
    },
    NavLink {
        label: "Reservations",
        path: "/reservations",
        change_frequency: ChangeFrequency::Monthly,
    },
];

pub const HOME_HERO: HeroMediaSource = HeroMediaSource {
    video: "/assets/video/hero.mp4",
    poster: "/assets/images/hero-poster.webp",
    alt: "Chefs finishing dishes at the pass",
};

pub(super) fn restaurant() -> RestaurantInfo {
    RestaurantInfo {
        name: "Saffron House".to_string(),
        tagline: "Indian soul food, cooked over fire".to_string(),
        address: vec![
            "14 Market Row".to_string(),
            "London".to_string(),
            "SE1 9AB".to_string(),
        ],
        phone: "020 7946 0321".to_string(),
        email: "hello@saffronhouse.example".to_string(),
        booking_url: "https://bookings.saffronhouse.example".to_string(),
        opening_hours: vec![
            OpeningHours {
                days: "Monday to Friday".to_string(),
                hours: "12:00 to 15:00, 17:30 to 22:30".to_string(),
            },
            OpeningHours {
                days: "Saturday".to_string(),
                hours: "12:00 to 23:00".to_string(),
            },
            OpeningHours {
                days: "Sunday".to_string(),
                hours: "12:00 to 21:00".to_string(),
            },
        ],
    }
}

pub(super) fn set_lunch() -> SetLunchMenu {
    SetLunchMenu {
        title: "Weekday Set Lunch".to_string(),
        price: "£16.95".to_string(),
        availability: "Monday to Friday, 12:00 to 15:00".to_string(),
        courses: vec![
            Course::choice(
                1,
                "Starter",
                vec![
                    MenuOption::new("Onion Bhaji", "Gram flour fritters, tamarind chutney")
                        .vegetarian(),
                    MenuOption::new("Chicken 65", "Curry leaf and chilli fried chicken"),
                    MenuOption::new("Aloo Tikki", "Spiced potato cakes, mint yoghurt")
                        .vegetarian(),
                ],
            ),
            Course::choice(
                2,
                "Main",
                vec![
                    MenuOption::new("Chicken Chettinad", "Black pepper and roasted coconut"),
                    MenuOption::new("Lamb Keema Matar", "Minced lamb with green peas"),
                    MenuOption::new("Baingan Bharta", "Smoked aubergine, tomato and onion")
                        .vegetarian(),
                ],
            ),
            Course::fixed(
                3,
                "Dessert",
                FixedMenuItem {
                    name: "Kheer".to_string(),
                    description: "Cardamom rice pudding with jaggery".to_string(),
                },
            ),
        ],
        included_sides: IncludedSides {
            monday: DailyMenu::new("Aloo Gobi", "Tadka Dal", "Jeera Rice"),
            tuesday: DailyMenu::new("Bhindi Masala", "Dal Palak", "Lemon Rice"),
            wednesday: DailyMenu::new("Cabbage Thoran", "Chana Dal", "Peas Pulao"),
            thursday: DailyMenu::new("Mixed Vegetable Jalfrezi", "Dal Makhani", "Steamed Basmati"),
            friday: DailyMenu::new("Saag Aloo", "Masoor Dal", "Coconut Rice"),
        },
        notes: vec![
            "Every set lunch comes with the day's vegetable, dal, rice and a naan.".to_string(),
            "Not available on bank holidays.".to_string(),
        ],
    }
}

pub(super) fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(
            "The rogan josh is the best I have had outside Srinagar.",
            "Priya Raman",
            "Food writer",
            5,
        ),
        Testimonial::new(
            "Set lunch is a steal. Three courses and back at my desk in under an hour.",
            "Tom Ellery",
            "Regular",
            5,
        ),
        Testimonial::new(
            "Warm service, and the bar bites are made for sharing.",
            "Aisha Bello",
            "Local guide",
            4,
        ),
        Testimonial::new(
            "Came for the biryani, stayed for the gulab jamun.",
            "Marcus Chen",
            "Diner",
            5,
        ),
    ]
}

pub(super) fn events() -> Vec<Event> {
    vec![
        Event {
            title: "Diwali Feast".to_string(),
            when: "Every evening during Diwali week".to_string(),
            description: "A seven-course tasting menu of festive sweets and savouries."
                .to_string(),
            image: "/assets/images/events/diwali.webp".to_string(),
        },
        Event {
            title: "Thali Thursdays".to_string(),
            when: "Thursdays from 17:30".to_string(),
            description: "A rotating regional thali, from Kerala to Punjab.".to_string(),
            image: "/assets/images/events/thali.webp".to_string(),
        },
        Event {
            title: "Live Ghazal Nights".to_string(),
            when: "First Saturday of the month".to_string(),
            description: "Live music in the bar with a dedicated small plates menu."
                .to_string(),
            image: "/assets/images/events/ghazal.webp".to_string(),
        },
    ]
}

pub(super) fn offers() -> Vec<Offer> {
    vec![
        Offer {
            title: "Early Evening".to_string(),
            headline: "Two courses for £22".to_string(),
            description: "Any small plate and any curry, seated before 18:30.".to_string(),
            terms: "Monday to Thursday. Not with other offers.".to_string(),
        },
        Offer {
            title: "Bar Hour".to_string(),
            headline: "Half-price bar bites".to_string(),
            description: "Every bar bite at half price with any drink.".to_string(),
            terms: "Daily 17:00 to 18:00, bar seating only.".to_string(),
        },
        Offer {
            title: "Birthday".to_string(),
            headline: "Dessert on us".to_string(),
            description: "Tell us when you book and the birthday guest's dessert is free."
                .to_string(),
            terms: "Tables of two or more.".to_string(),
        },
    ]
}

pub(super) fn chef() -> ChefProfile {
    ChefProfile {
        name: "Anjali Mehra".to_string(),
        role: "Chef Patron".to_string(),
        portrait: "/assets/images/chef.webp".to_string(),
        biography: vec![
            "Anjali grew up in her grandmother's kitchen in Lucknow, learning the slow \
             dum cooking of the Awadhi court."
                .to_string(),
            "After a decade in London kitchens she opened Saffron House to cook the food \
             she grew up with, with produce from farms she knows by name."
                .to_string(),
        ],
        signature_dishes: vec![
            "Lamb Rogan Josh".to_string(),
            "Hyderabadi Chicken Biryani".to_string(),
            "Gajar Halwa".to_string(),
        ],
    }
}
