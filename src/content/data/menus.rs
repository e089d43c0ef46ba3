use crate::content::{Menu, MenuCategory, MenuItem, Price};

fn item(name: &str, price: &str, description: &str) -> MenuItem {
    MenuItem::new(name, Price::flat(price), description)
}

fn wine(name: &str, glass: &str, bottle: &str, description: &str) -> MenuItem {
    MenuItem::new(name, Price::tiered(Some(glass), Some(bottle)), description)
}

pub(super) fn bar_bites() -> Menu {
    Menu::new(
        "Bar Bites",
        "bar-bites",
        vec![
            MenuCategory::new(
                "Small Plates",
                vec![
                    item(
                        "Samosa Chaat",
                        "£6.50",
                        "Crushed vegetable samosa, chickpeas, tamarind, yoghurt and pomegranate",
                    )
                    .vegetarian(),
                    item(
                        "Pani Puri",
                        "£5.50",
                        "Crisp semolina shells, spiced potato and mint water to pour",
                    )
                    .vegetarian(),
                    item(
                        "Chilli Paneer",
                        "£7.00",
                        "Indo-Chinese wok-tossed paneer with peppers and spring onion",
                    )
                    .vegetarian(),
                    item(
                        "Keema Pau",
                        "£8.00",
                        "Spiced minced lamb, buttered pau buns, pickled onion",
                    ),
                ],
            ),
            MenuCategory::new(
                "From the Grill",
                vec![
                    item(
                        "Chicken Tikka",
                        "£8.50",
                        "Chargrilled thigh, hung yoghurt, Kashmiri chilli and green chutney",
                    ),
                    item(
                        "Lamb Seekh Kebab",
                        "£9.00",
                        "Minced lamb skewers with ginger, coriander and charred lime",
                    ),
                    item(
                        "Tandoori Broccoli",
                        "£7.50",
                        "Cheese and cardamom marinade, toasted almonds",
                    )
                    .vegetarian(),
                ],
            )
            .with_notes(&["Served until 10pm at the bar."]),
        ],
    )
}

pub(super) fn soul_food() -> Menu {
    Menu::new(
        "Soul Food",
        "soul-food",
        vec![
            MenuCategory::new(
                "Curries",
                vec![
                    item(
                        "Butter Chicken",
                        "£15.50",
                        "Smoked tandoori chicken in a tomato, fenugreek and butter sauce",
                    ),
                    item(
                        "Lamb Rogan Josh",
                        "£17.00",
                        "Slow-cooked Kashmiri lamb shoulder, fennel and dried ginger",
                    ),
                    item(
                        "Goan Fish Curry",
                        "£16.50",
                        "Hake in coconut, kokum and red chilli",
                    ),
                    item(
                        "Paneer Makhani",
                        "£13.50",
                        "Soft paneer in a velvety tomato and cashew gravy",
                    )
                    .vegetarian(),
                    item(
                        "Chana Masala",
                        "£11.50",
                        "Punjabi chickpeas with dried mango and black cardamom",
                    )
                    .vegetarian(),
                ],
            )
            .with_notes(&[
                "All curries are served with steamed basmati.",
                "Please tell us about any allergies before ordering.",
            ]),
            MenuCategory::new(
                "Biryani",
                vec![
                    item(
                        "Hyderabadi Chicken Biryani",
                        "£16.00",
                        "Dum-cooked under pastry, saffron, fried onions, raita",
                    ),
                    item(
                        "Jackfruit Biryani",
                        "£14.00",
                        "Young jackfruit, whole spices, mint and burnt garlic",
                    )
                    .vegetarian(),
                ],
            ),
            MenuCategory::new(
                "Breads & Sides",
                vec![
                    item("Garlic Naan", "£3.50", "Tandoor-baked, garlic butter").vegetarian(),
                    item("Laccha Paratha", "£3.50", "Flaky layered wholewheat bread")
                        .vegetarian(),
                    item("Dal Makhani", "£6.00", "Black lentils simmered overnight")
                        .vegetarian(),
                    item("Kachumber", "£4.00", "Cucumber, tomato, onion and lime")
                        .vegetarian(),
                ],
            ),
        ],
    )
}

pub(super) fn drinks() -> Menu {
    Menu::new(
        "Drinks",
        "drinks",
        vec![
            MenuCategory::new(
                "Wine",
                vec![
                    wine(
                        "Sula Chenin Blanc, Nashik",
                        "£7.50",
                        "£29.00",
                        "Off-dry with tropical fruit, made for spice",
                    ),
                    wine(
                        "Picpoul de Pinet, Languedoc",
                        "£8.00",
                        "£32.00",
                        "Crisp, saline and lemony",
                    ),
                    wine(
                        "Malbec, Mendoza",
                        "£8.50",
                        "£34.00",
                        "Plum and violet with soft tannins",
                    ),
                    MenuItem::new(
                        "Crémant de Loire",
                        Price::tiered(None, Some("£42.00")),
                        "Traditional method sparkling, bottle only",
                    ),
                ],
            )
            .with_notes(&["Glass measures are 175ml."]),
            MenuCategory::new(
                "Cocktails & Soft Drinks",
                vec![
                    item(
                        "Saffron Spritz",
                        "£11.00",
                        "Saffron-infused aperitivo, prosecco, soda",
                    ),
                    item("Mango Lassi", "£4.50", "Alphonso mango, yoghurt, cardamom")
                        .vegetarian(),
                    item("Masala Chai", "£3.50", "Assam tea brewed with whole spices")
                        .vegetarian(),
                ],
            ),
        ],
    )
}

pub(super) fn desserts() -> Menu {
    Menu::new(
        "Desserts",
        "desserts",
        vec![MenuCategory::new(
            "Desserts",
            vec![
                item(
                    "Gulab Jamun",
                    "£6.00",
                    "Warm milk dumplings in rose syrup, pistachio",
                )
                .vegetarian(),
                item(
                    "Kulfi",
                    "£5.50",
                    "Malai or mango, ask for today's flavours",
                )
                .vegetarian(),
                item(
                    "Gajar Halwa",
                    "£6.50",
                    "Slow-cooked carrot pudding with clotted cream",
                )
                .vegetarian(),
            ],
        )],
    )
}
