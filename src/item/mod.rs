use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::util::parse_flag;

/// The kind tag of an item, as written to the `type` key of the export.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemType {
    TextHint,
    InputPlz,
    Radio,
    InputText,
    InputNumber,
    /// A tag the editor does not know how to build fields for
    Other(String),
}

impl ItemType {
    /// The five kinds the editor offers, in menu order
    pub fn known() -> [ItemType; 5] {
        [
            ItemType::TextHint,
            ItemType::InputPlz,
            ItemType::Radio,
            ItemType::InputText,
            ItemType::InputNumber,
        ]
    }

    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "TEXT_HINT" => ItemType::TextHint,
            "INPUT_PLZ" => ItemType::InputPlz,
            "RADIO" => ItemType::Radio,
            "INPUT_TEXT" => ItemType::InputText,
            "INPUT_NUMBER" => ItemType::InputNumber,
            other => ItemType::Other(other.to_owned()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            ItemType::TextHint => "TEXT_HINT",
            ItemType::InputPlz => "INPUT_PLZ",
            ItemType::Radio => "RADIO",
            ItemType::InputText => "INPUT_TEXT",
            ItemType::InputNumber => "INPUT_NUMBER",
            ItemType::Other(tag) => tag,
        }
    }

    /// Caption shown in the type menu
    pub fn label(&self) -> &str {
        match self {
            ItemType::TextHint => "Hinweistext",
            ItemType::InputPlz => "Postleitzahl Eingabe",
            ItemType::Radio => "Radio Button",
            ItemType::InputText => "Text Eingabe",
            ItemType::InputNumber => "Nummer Eingabe",
            ItemType::Other(tag) => tag,
        }
    }
}

/// Fields shared by the three text-input kinds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputFields {
    pub name: String,
    pub label: String,
    pub required: bool,
    pub placeholder: String,
}

/// The kind of an item together with the fields that kind is built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    TextHint {
        text: String,
        headline: String,
    },
    InputPlz(InputFields),
    Radio {
        group: String,
        label: String,
        /// Absent until the user first edits it
        icon_path: Option<String>,
    },
    InputText(InputFields),
    InputNumber(InputFields),
    Unknown {
        type_tag: String,
    },
}

/// One input or display element within a step.
///
/// Fields that belong to the kind live in [`ItemKind`]. Any other field set
/// on the item is kept in `extra`, in the order it was first set, and is
/// exported after the kind's own keys.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub kind: ItemKind,
    extra: Map<String, Value>,
}

impl From<ItemKind> for Item {
    fn from(kind: ItemKind) -> Self {
        Self {
            kind,
            extra: Map::new(),
        }
    }
}

/// Selects one editable field of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Headline,
    Text,
    Name,
    Label,
    Required,
    Placeholder,
    Group,
    IconPath,
}

impl ItemField {
    pub fn key(&self) -> &'static str {
        match self {
            ItemField::Headline => "headline",
            ItemField::Text => "text",
            ItemField::Name => "name",
            ItemField::Label => "label",
            ItemField::Required => "required",
            ItemField::Placeholder => "placeholder",
            ItemField::Group => "group",
            ItemField::IconPath => "iconPath",
        }
    }
}

impl Item {
    pub fn item_type(&self) -> ItemType {
        match &self.kind {
            ItemKind::TextHint { .. } => ItemType::TextHint,
            ItemKind::InputPlz(_) => ItemType::InputPlz,
            ItemKind::Radio { .. } => ItemType::Radio,
            ItemKind::InputText(_) => ItemType::InputText,
            ItemKind::InputNumber(_) => ItemType::InputNumber,
            ItemKind::Unknown { type_tag } => ItemType::Other(type_tag.clone()),
        }
    }

    pub fn is_radio(&self) -> bool {
        matches!(self.kind, ItemKind::Radio { .. })
    }

    /// The group of a radio item, `None` for every other kind
    pub fn radio_group(&self) -> Option<&str> {
        match &self.kind {
            ItemKind::Radio { group, .. } => Some(group),
            _ => None,
        }
    }

    /// Fields set on the item that its kind does not define
    pub fn extra_fields(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// An extra field's text, if it is set and holds a string
    pub fn extra_text(&self, field: ItemField) -> Option<&str> {
        self.extra.get(field.key()).and_then(Value::as_str)
    }

    /// Store `raw` into `field`. `Required` is read as a `"true"`/`"false"`
    /// flag, everything else verbatim.
    ///
    /// A field the kind does not define is kept as an extra field.
    pub fn set_field(&mut self, field: ItemField, raw: &str) {
        if !self.kind.set_field(field, raw) {
            let value = match field {
                ItemField::Required => Value::Bool(parse_flag(raw)),
                _ => Value::String(raw.to_owned()),
            };
            self.extra.insert(field.key().to_owned(), value);
        }
    }
}

impl ItemKind {
    /// Store `raw` into one of the kind's own fields; false when the kind
    /// has no such field.
    fn set_field(&mut self, field: ItemField, raw: &str) -> bool {
        let slot: &mut String = match (self, field) {
            (ItemKind::TextHint { text, .. }, ItemField::Text) => text,
            (ItemKind::TextHint { headline, .. }, ItemField::Headline) => headline,

            (ItemKind::Radio { group, .. }, ItemField::Group) => group,
            (ItemKind::Radio { label, .. }, ItemField::Label) => label,
            (ItemKind::Radio { icon_path, .. }, ItemField::IconPath) => {
                *icon_path = Some(raw.to_owned());
                return true;
            }

            (
                ItemKind::InputPlz(fields)
                | ItemKind::InputText(fields)
                | ItemKind::InputNumber(fields),
                field,
            ) => match field {
                ItemField::Name => &mut fields.name,
                ItemField::Label => &mut fields.label,
                ItemField::Placeholder => &mut fields.placeholder,
                ItemField::Required => {
                    fields.required = parse_flag(raw);
                    return true;
                }
                _ => return false,
            },

            _ => return false,
        };

        *slot = raw.to_owned();
        true
    }
}

// Keys are written in the order the defaults are built, with `type` first,
// so the export reads the same as a freshly constructed item. Extra fields
// follow in the order they were first set.
impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", self.item_type().tag())?;

        match &self.kind {
            ItemKind::TextHint { text, headline } => {
                map.serialize_entry("text", text)?;
                map.serialize_entry("headline", headline)?;
            }
            ItemKind::InputPlz(fields)
            | ItemKind::InputText(fields)
            | ItemKind::InputNumber(fields) => {
                map.serialize_entry("name", &fields.name)?;
                map.serialize_entry("label", &fields.label)?;
                map.serialize_entry("required", &fields.required)?;
                map.serialize_entry("placeholder", &fields.placeholder)?;
            }
            ItemKind::Radio {
                group,
                label,
                icon_path,
            } => {
                map.serialize_entry("group", group)?;
                map.serialize_entry("label", label)?;
                if let Some(icon_path) = icon_path {
                    map.serialize_entry("iconPath", icon_path)?;
                }
            }
            ItemKind::Unknown { .. } => {}
        }

        for (key, value) in &self.extra {
            map.serialize_entry(key, value)?;
        }

        map.end()
    }
}

/// Construction of items with the per-kind default values.
pub mod factory {
    use super::*;

    /// Build the default shape for `item_type`, with no extra fields.
    ///
    /// A new radio item takes the group of the first radio item among
    /// `siblings`, so buttons added to the same step share a group.
    pub fn default_item(item_type: &ItemType, siblings: &[Item]) -> Item {
        let kind = match item_type {
            ItemType::TextHint => return create_text_hint(),
            ItemType::InputPlz => ItemKind::InputPlz(InputFields {
                name: "Postleitzahl".to_owned(),
                label: String::new(),
                required: true,
                placeholder: "Postleitzahl".to_owned(),
            }),
            ItemType::Radio => ItemKind::Radio {
                group: siblings
                    .iter()
                    .find_map(Item::radio_group)
                    .unwrap_or_default()
                    .to_owned(),
                label: String::new(),
                icon_path: None,
            },
            ItemType::InputText => ItemKind::InputText(InputFields::default()),
            ItemType::InputNumber => ItemKind::InputNumber(InputFields::default()),
            ItemType::Other(tag) => ItemKind::Unknown {
                type_tag: tag.clone(),
            },
        };
        Item::from(kind)
    }

    /// An empty hint, the kind every freshly added item starts as
    pub fn create_text_hint() -> Item {
        Item::from(ItemKind::TextHint {
            text: String::new(),
            headline: String::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::factory::default_item;
    use super::*;

    fn radio(group: &str) -> Item {
        Item::from(ItemKind::Radio {
            group: group.to_owned(),
            label: String::new(),
            icon_path: None,
        })
    }

    #[test]
    fn test_tags_round_trip_through_item_type() {
        for kind in ItemType::known() {
            assert_eq!(ItemType::from_tag(kind.tag()), kind);
        }
        assert_eq!(
            ItemType::from_tag("SLIDER"),
            ItemType::Other("SLIDER".to_owned())
        );
    }

    #[test]
    fn test_plz_defaults() {
        let item = default_item(&ItemType::InputPlz, &[]);
        assert_eq!(
            item.kind,
            ItemKind::InputPlz(InputFields {
                name: "Postleitzahl".into(),
                label: String::new(),
                required: true,
                placeholder: "Postleitzahl".into(),
            })
        );
        assert!(item.extra_fields().is_empty());
    }

    #[test]
    fn test_radio_takes_first_radio_group() {
        let siblings = vec![factory::create_text_hint(), radio("first"), radio("second")];
        let item = default_item(&ItemType::Radio, &siblings);
        assert_eq!(item.radio_group(), Some("first"));
    }

    #[test]
    fn test_radio_without_siblings_has_empty_group() {
        let item = default_item(&ItemType::Radio, &[factory::create_text_hint()]);
        assert_eq!(item.radio_group(), Some(""));
    }

    #[test]
    fn test_unknown_type_keeps_only_tag() {
        let item = default_item(&ItemType::Other("SLIDER".into()), &[]);
        assert_eq!(item.item_type().tag(), "SLIDER");
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"type":"SLIDER"}"#
        );
    }

    #[test]
    fn test_own_fields_are_set_in_place() {
        let mut hint = factory::create_text_hint();
        hint.set_field(ItemField::Headline, "Hallo");
        assert_eq!(
            hint.kind,
            ItemKind::TextHint {
                text: String::new(),
                headline: "Hallo".into()
            }
        );
        assert!(hint.extra_fields().is_empty());

        let mut input = default_item(&ItemType::InputNumber, &[]);
        input.set_field(ItemField::Required, "true");
        match input.kind {
            ItemKind::InputNumber(fields) => assert!(fields.required),
            other => panic!("unexpected item {:?}", other),
        }
    }

    #[test]
    fn test_foreign_fields_are_kept_after_own_keys() {
        let mut hint = factory::create_text_hint();
        hint.set_field(ItemField::Label, "Hinweis");
        hint.set_field(ItemField::Required, "true");
        hint.set_field(ItemField::Label, "Neu");

        assert_eq!(hint.extra_text(ItemField::Label), Some("Neu"));
        assert_eq!(
            serde_json::to_string(&hint).unwrap(),
            r#"{"type":"TEXT_HINT","text":"","headline":"","label":"Neu","required":true}"#
        );
    }

    #[test]
    fn test_icon_path_is_serialized_after_first_edit() {
        let mut item = radio("g1");
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"type":"RADIO","group":"g1","label":""}"#
        );

        item.set_field(ItemField::IconPath, "https://example.org/icon.svg");
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"type":"RADIO","group":"g1","label":"","iconPath":"https://example.org/icon.svg"}"#
        );
    }
}
