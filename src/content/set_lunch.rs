use chrono::Weekday;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::common::ContentError;
use crate::content::menu::require_text;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuOption {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub vegetarian: bool,
}

impl MenuOption {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            vegetarian: false,
        }
    }

    pub fn vegetarian(mut self) -> Self {
        self.vegetarian = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixedMenuItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// What the diner gets for a course: a pick from `options`, or one set `item`.
///
/// Serialized with a `selection_type` tag of `"choice"` or `"fixed"`, so
/// `options` only ever appears on choice courses and `item` on fixed ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "selection_type", rename_all = "lowercase")]
pub enum CourseSelection {
    Choice { options: Vec<MenuOption> },
    Fixed { item: FixedMenuItem },
}

impl CourseSelection {
    pub fn selection_type(&self) -> &'static str {
        match self {
            Self::Choice { .. } => "choice",
            Self::Fixed { .. } => "fixed",
        }
    }

    pub fn options(&self) -> Option<&[MenuOption]> {
        match self {
            Self::Choice { options } => Some(options.as_slice()),
            Self::Fixed { .. } => None,
        }
    }

    pub fn item(&self) -> Option<&FixedMenuItem> {
        match self {
            Self::Choice { .. } => None,
            Self::Fixed { item } => Some(item),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub course_number: u8,
    pub course_name: String,
    #[serde(flatten)]
    pub selection: CourseSelection,
}

impl Course {
    pub fn choice(course_number: u8, course_name: &str, options: Vec<MenuOption>) -> Self {
        Self {
            course_number,
            course_name: course_name.to_string(),
            selection: CourseSelection::Choice { options },
        }
    }

    pub fn fixed(course_number: u8, course_name: &str, item: FixedMenuItem) -> Self {
        Self {
            course_number,
            course_name: course_name.to_string(),
            selection: CourseSelection::Fixed { item },
        }
    }

    fn validate(&self) -> Result<(), ContentError> {
        require_text(&self.course_name, "course name")?;

        match &self.selection {
            CourseSelection::Choice { options } => {
                if options.is_empty() {
                    return Err(ContentError::NoCourseOptions(self.course_name.clone()));
                }
                for option in options {
                    require_text(
                        &option.name,
                        &format!("option name in course {:?}", self.course_name),
                    )?;
                }
                Ok(())
            }
            CourseSelection::Fixed { item } => require_text(
                &item.name,
                &format!("fixed item name in course {:?}", self.course_name),
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DailyMenu {
    pub vegetable: String,
    pub dal: String,
    pub rice: String,
}

impl DailyMenu {
    pub fn new(vegetable: &str, dal: &str, rice: &str) -> Self {
        Self {
            vegetable: vegetable.to_string(),
            dal: dal.to_string(),
            rice: rice.to_string(),
        }
    }
}

/// Sides served with every set lunch, one rota per weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IncludedSides {
    pub monday: DailyMenu,
    pub tuesday: DailyMenu,
    pub wednesday: DailyMenu,
    pub thursday: DailyMenu,
    pub friday: DailyMenu,
}

impl IncludedSides {
    /// Set lunch is a weekday service; weekends have no sides.
    pub fn for_weekday(&self, day: Weekday) -> Option<&DailyMenu> {
        match day {
            Weekday::Mon => Some(&self.monday),
            Weekday::Tue => Some(&self.tuesday),
            Weekday::Wed => Some(&self.wednesday),
            Weekday::Thu => Some(&self.thursday),
            Weekday::Fri => Some(&self.friday),
            Weekday::Sat | Weekday::Sun => None,
        }
    }

    pub fn days(&self) -> [(Weekday, &DailyMenu); 5] {
        [
            (Weekday::Mon, &self.monday),
            (Weekday::Tue, &self.tuesday),
            (Weekday::Wed, &self.wednesday),
            (Weekday::Thu, &self.thursday),
            (Weekday::Fri, &self.friday),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetLunchMenu {
    pub title: String,
    pub price: String,
    pub availability: String,
    pub courses: Vec<Course>,
    pub included_sides: IncludedSides,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl SetLunchMenu {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let value: Value = serde_json::from_str(json)?;
        check_course_fields(&value)?;

        let menu: SetLunchMenu = serde_json::from_value(value)?;
        menu.validate()?;
        Ok(menu)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        require_text(&self.title, "set lunch title")?;
        require_text(&self.price, "set lunch price")?;

        if self.courses.is_empty() {
            return Err(ContentError::Empty("set lunch course list".to_string()));
        }
        for course in &self.courses {
            course.validate()?;
        }

        for (day, sides) in self.included_sides.days() {
            for (what, value) in [
                ("vegetable", &sides.vegetable),
                ("dal", &sides.dal),
                ("rice", &sides.rice),
            ] {
                require_text(value, &format!("{what} for {day}"))?;
            }
        }

        Ok(())
    }
}

const COURSE_FIELDS: &[&str] = &[
    "course_number",
    "course_name",
    "selection_type",
    "options",
    "item",
];

/// `Course` flattens its selection, so serde cannot deny unknown course keys
/// itself. Checks them here, along with the legacy vegetarian flag and a
/// selection field that does not belong to the course's selection type.
fn check_course_fields(value: &Value) -> Result<(), ContentError> {
    let title = value
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let courses = value
        .get("courses")
        .and_then(Value::as_array)
        .into_iter()
        .flatten();

    for course in courses {
        let course_name = course
            .get("course_name")
            .and_then(Value::as_str)
            .unwrap_or_default();

        let options = course
            .get("options")
            .and_then(Value::as_array)
            .into_iter()
            .flatten();
        let legacy = std::iter::once(course)
            .chain(options)
            .find(|v| v.get("is_vegetarian").is_some());
        if let Some(found) = legacy {
            return Err(ContentError::LegacyVegetarianField {
                menu: title.to_string(),
                item: found
                    .get("name")
                    .or_else(|| found.get("course_name"))
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            });
        }

        let stray = match course.get("selection_type").and_then(Value::as_str) {
            Some("choice") => Some("item"),
            Some("fixed") => Some("options"),
            _ => None,
        };
        if let Some(field) = stray.filter(|f| course.get(f).is_some()) {
            return Err(ContentError::MixedCourseSelection {
                course: course_name.to_string(),
                field,
            });
        }

        let unknown = course
            .as_object()
            .into_iter()
            .flat_map(|fields| fields.keys())
            .find(|key| !COURSE_FIELDS.contains(&key.as_str()));
        if let Some(key) = unknown {
            return Err(ContentError::UnknownCourseField {
                course: course_name.to_string(),
                field: key.clone(),
            });
        }
    }

    Ok(())
}
