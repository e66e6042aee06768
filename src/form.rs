//! Item Form State
//!
//! One structured draft for the add and edit forms, updated by key,
//! validated before submission and diffed field by field against the
//! original item for partial updates.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::api::MultipartPayload;
use crate::models::{Item, CONDITION_OPTIONS, GENDER_OPTIONS, TYPE_OPTIONS};
use crate::upload::UploadImage;

/// Free-text inputs of the item form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemField {
    Name,
    Description,
    ItemNumber,
    Quantity,
    Cost,
    RetailCost,
    Size,
    AmericanSize,
    GhanaianSize,
}

impl ItemField {
    pub const ALL: [ItemField; 9] = [
        ItemField::Name,
        ItemField::Description,
        ItemField::ItemNumber,
        ItemField::Quantity,
        ItemField::Cost,
        ItemField::RetailCost,
        ItemField::Size,
        ItemField::AmericanSize,
        ItemField::GhanaianSize,
    ];

    /// Multipart field name
    pub fn key(self) -> &'static str {
        match self {
            ItemField::Name => "name",
            ItemField::Description => "description",
            ItemField::ItemNumber => "itemNumber",
            ItemField::Quantity => "quantity",
            ItemField::Cost => "cost",
            ItemField::RetailCost => "retailCost",
            ItemField::Size => "size",
            ItemField::AmericanSize => "americanSize",
            ItemField::GhanaianSize => "GhanaianSize",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ItemField::Name => "Name",
            ItemField::Description => "Description",
            ItemField::ItemNumber => "Item Number",
            ItemField::Quantity => "Quantity Available",
            ItemField::Cost => "Cost (GHS)",
            ItemField::RetailCost => "Retail Cost (GHS)",
            ItemField::Size => "Size",
            ItemField::AmericanSize => "American Size",
            ItemField::GhanaianSize => "Ghanaian Size",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            ItemField::Name | ItemField::Description | ItemField::ItemNumber | ItemField::Quantity | ItemField::Cost
        )
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, ItemField::Quantity | ItemField::Cost | ItemField::RetailCost)
    }
}

/// Multi-select tag groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagGroup {
    Gender,
    Type,
    Condition,
}

impl TagGroup {
    pub const ALL: [TagGroup; 3] = [TagGroup::Gender, TagGroup::Type, TagGroup::Condition];

    pub fn key(self) -> &'static str {
        match self {
            TagGroup::Gender => "Gender",
            TagGroup::Type => "type",
            TagGroup::Condition => "shoeStatus",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TagGroup::Gender => "Gender",
            TagGroup::Type => "Type",
            TagGroup::Condition => "Condition",
        }
    }

    pub fn options(self) -> &'static [&'static str] {
        match self {
            TagGroup::Gender => GENDER_OPTIONS,
            TagGroup::Type => TYPE_OPTIONS,
            TagGroup::Condition => CONDITION_OPTIONS,
        }
    }
}

/// Whether the draft creates a new item or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Raw form state, exactly as typed
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub item_number: String,
    pub quantity: String,
    pub cost: String,
    pub retail_cost: String,
    pub size: String,
    pub american_size: String,
    pub ghanaian_size: String,
    pub gender: BTreeSet<String>,
    pub types: BTreeSet<String>,
    pub condition: BTreeSet<String>,
    /// Already-uploaded image URLs kept on the item
    pub images: Vec<String>,
    /// Newly picked files
    pub uploads: Vec<UploadImage>,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            item_number: String::new(),
            quantity: "0".to_string(),
            cost: "0".to_string(),
            retail_cost: "0".to_string(),
            size: String::new(),
            american_size: String::new(),
            ghanaian_size: String::new(),
            gender: BTreeSet::new(),
            types: BTreeSet::new(),
            condition: BTreeSet::new(),
            images: Vec::new(),
            uploads: Vec::new(),
        }
    }
}

impl ItemDraft {
    /// Pre-populate from an existing item
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            description: item.description.clone(),
            item_number: item.item_number.clone(),
            quantity: item.quantity.to_string(),
            cost: item.cost.to_string(),
            retail_cost: item.retail_cost.to_string(),
            size: item.size.clone(),
            american_size: item.american_size.clone(),
            ghanaian_size: item.ghanaian_size.clone(),
            gender: item.gender.clone(),
            types: item.types.clone(),
            condition: item.shoe_status.clone(),
            images: item.images.clone(),
            uploads: Vec::new(),
        }
    }

    pub fn get(&self, field: ItemField) -> &str {
        match field {
            ItemField::Name => &self.name,
            ItemField::Description => &self.description,
            ItemField::ItemNumber => &self.item_number,
            ItemField::Quantity => &self.quantity,
            ItemField::Cost => &self.cost,
            ItemField::RetailCost => &self.retail_cost,
            ItemField::Size => &self.size,
            ItemField::AmericanSize => &self.american_size,
            ItemField::GhanaianSize => &self.ghanaian_size,
        }
    }

    /// Update one text input
    pub fn set(&mut self, field: ItemField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ItemField::Name => self.name = value,
            ItemField::Description => self.description = value,
            ItemField::ItemNumber => self.item_number = value,
            ItemField::Quantity => self.quantity = value,
            ItemField::Cost => self.cost = value,
            ItemField::RetailCost => self.retail_cost = value,
            ItemField::Size => self.size = value,
            ItemField::AmericanSize => self.american_size = value,
            ItemField::GhanaianSize => self.ghanaian_size = value,
        }
    }

    pub fn tags(&self, group: TagGroup) -> &BTreeSet<String> {
        match group {
            TagGroup::Gender => &self.gender,
            TagGroup::Type => &self.types,
            TagGroup::Condition => &self.condition,
        }
    }

    /// Add the tag if absent, remove it if present
    pub fn toggle(&mut self, group: TagGroup, value: &str) {
        let set = match group {
            TagGroup::Gender => &mut self.gender,
            TagGroup::Type => &mut self.types,
            TagGroup::Condition => &mut self.condition,
        };
        if !set.remove(value) {
            set.insert(value.to_string());
        }
    }

    pub fn add_uploads(&mut self, uploads: Vec<UploadImage>) {
        self.uploads.extend(uploads);
    }

    pub fn remove_upload(&mut self, index: usize) {
        if index < self.uploads.len() {
            self.uploads.remove(index);
        }
    }

    pub fn remove_image(&mut self, index: usize) {
        if index < self.images.len() {
            self.images.remove(index);
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check the draft against the form schema
    pub fn validate(&self, mode: DraftMode) -> Result<ValidItem, Vec<FieldError>> {
        let mut errors = Vec::new();

        for field in ItemField::ALL {
            if field.is_required() && self.get(field).trim().is_empty() {
                errors.push(FieldError::new(field.label(), "is required"));
            }
        }

        let quantity = parse_quantity(&self.quantity).unwrap_or_else(|e| {
            errors.push(e);
            None
        });
        let cost = parse_amount(ItemField::Cost, &self.cost).unwrap_or_else(|e| {
            errors.push(e);
            None
        });
        let retail_cost = parse_amount(ItemField::RetailCost, &self.retail_cost).unwrap_or_else(|e| {
            errors.push(e);
            None
        });

        if mode == DraftMode::Create && self.uploads.is_empty() {
            errors.push(FieldError::new("Images", "add at least one image"));
        }

        match (quantity, cost, retail_cost) {
            (Some(quantity), Some(cost), retail_cost) if errors.is_empty() => Ok(ValidItem {
                name: self.name.clone(),
                description: self.description.clone(),
                item_number: self.item_number.clone(),
                quantity,
                cost,
                retail_cost: retail_cost.unwrap_or_default(),
                size: self.size.clone(),
                american_size: self.american_size.clone(),
                ghanaian_size: self.ghanaian_size.clone(),
                gender: self.gender.clone(),
                types: self.types.clone(),
                condition: self.condition.clone(),
                images: self.images.clone(),
                uploads: self.uploads.clone(),
            }),
            _ => Err(errors),
        }
    }
}

/// Empty input is `None`; the required check reports it
fn parse_quantity(raw: &str) -> Result<Option<u32>, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<u32>()
        .map(Some)
        .map_err(|_| FieldError::new(ItemField::Quantity.label(), "must be a whole number of 0 or more"))
}

fn parse_amount(field: ItemField, raw: &str) -> Result<Option<f64>, FieldError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(value)),
        _ => Err(FieldError::new(field.label(), "must be an amount of 0 or more")),
    }
}

/// A draft that passed validation, with typed numeric fields
#[derive(Debug, Clone, PartialEq)]
pub struct ValidItem {
    pub name: String,
    pub description: String,
    pub item_number: String,
    pub quantity: u32,
    pub cost: f64,
    pub retail_cost: f64,
    pub size: String,
    pub american_size: String,
    pub ghanaian_size: String,
    pub gender: BTreeSet<String>,
    pub types: BTreeSet<String>,
    pub condition: BTreeSet<String>,
    pub images: Vec<String>,
    pub uploads: Vec<UploadImage>,
}

impl ValidItem {
    fn text(&self, field: ItemField) -> String {
        match field {
            ItemField::Name => self.name.clone(),
            ItemField::Description => self.description.clone(),
            ItemField::ItemNumber => self.item_number.clone(),
            ItemField::Quantity => self.quantity.to_string(),
            ItemField::Cost => self.cost.to_string(),
            ItemField::RetailCost => self.retail_cost.to_string(),
            ItemField::Size => self.size.clone(),
            ItemField::AmericanSize => self.american_size.clone(),
            ItemField::GhanaianSize => self.ghanaian_size.clone(),
        }
    }

    fn tags(&self, group: TagGroup) -> &BTreeSet<String> {
        match group {
            TagGroup::Gender => &self.gender,
            TagGroup::Type => &self.types,
            TagGroup::Condition => &self.condition,
        }
    }

    /// Whether `field` differs from the original item
    fn changed(&self, field: ItemField, original: &Item) -> bool {
        match field {
            ItemField::Name => self.name != original.name,
            ItemField::Description => self.description != original.description,
            ItemField::ItemNumber => self.item_number != original.item_number,
            ItemField::Quantity => self.quantity != original.quantity,
            ItemField::Cost => self.cost != original.cost,
            ItemField::RetailCost => self.retail_cost != original.retail_cost,
            ItemField::Size => self.size != original.size,
            ItemField::AmericanSize => self.american_size != original.american_size,
            ItemField::GhanaianSize => self.ghanaian_size != original.ghanaian_size,
        }
    }

    /// Full payload for `POST /add-shoe`
    pub fn into_create_payload(self) -> MultipartPayload {
        let mut payload = MultipartPayload::new();
        for field in ItemField::ALL {
            payload.text(field.key(), self.text(field));
        }
        for group in TagGroup::ALL {
            payload.text(group.key(), json_array(self.tags(group)));
        }
        for upload in self.uploads {
            payload.file("images", upload);
        }
        payload
    }

    /// Changed fields only, for `PUT /update-shoe/{id}`
    pub fn diff(&self, original: &Item) -> MultipartPayload {
        let mut payload = MultipartPayload::new();
        for field in ItemField::ALL {
            if self.changed(field, original) {
                payload.text(field.key(), self.text(field));
            }
        }

        let original_tags = [&original.gender, &original.types, &original.shoe_status];
        for (group, before) in TagGroup::ALL.into_iter().zip(original_tags) {
            if self.tags(group) != before {
                payload.text(group.key(), json_array(self.tags(group)));
            }
        }

        if !self.uploads.is_empty() {
            for upload in &self.uploads {
                payload.file("images", upload.clone());
            }
        } else if self.images != original.images {
            payload.text("images", serde_json::Value::from(self.images.clone()).to_string());
        }
        payload
    }
}

fn json_array(set: &BTreeSet<String>) -> String {
    serde_json::Value::from(set.iter().cloned().collect::<Vec<_>>()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> Item {
        Item {
            id: "a1".to_string(),
            name: "Air Max 90".to_string(),
            description: "Classic runner".to_string(),
            item_number: "SKU-001".to_string(),
            gender: BTreeSet::from(["Men".to_string(), "Unisex".to_string()]),
            types: BTreeSet::from(["Sneakers".to_string()]),
            shoe_status: BTreeSet::from(["Brand New".to_string()]),
            quantity: 5,
            cost: 99.99,
            retail_cost: 149.5,
            size: "42".to_string(),
            american_size: "9".to_string(),
            ghanaian_size: "42".to_string(),
            images: vec!["https://cdn/1.png".to_string(), "https://cdn/2.png".to_string()],
            created_at: None,
        }
    }

    fn image(name: &str) -> UploadImage {
        UploadImage::from_bytes(name, "image/png", vec![1, 2, 3])
    }

    fn filled_draft() -> ItemDraft {
        let mut draft = ItemDraft::default();
        draft.set(ItemField::Name, "Air Max 90");
        draft.set(ItemField::Description, "Classic runner");
        draft.set(ItemField::ItemNumber, "SKU-001");
        draft.set(ItemField::Quantity, "5");
        draft.set(ItemField::Cost, "99.99");
        draft.toggle(TagGroup::Gender, "Men");
        draft.add_uploads(vec![image("a.png")]);
        draft
    }

    #[test]
    fn test_set_and_get_by_key() {
        let mut draft = ItemDraft::default();
        for field in ItemField::ALL {
            draft.set(field, field.key());
        }
        for field in ItemField::ALL {
            assert_eq!(draft.get(field), field.key());
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut draft = ItemDraft::default();
        draft.toggle(TagGroup::Type, "Boots");
        draft.toggle(TagGroup::Type, "Dress");
        assert_eq!(draft.tags(TagGroup::Type).len(), 2);
        draft.toggle(TagGroup::Type, "Boots");
        assert_eq!(draft.tags(TagGroup::Type), &BTreeSet::from(["Dress".to_string()]));
        assert!(draft.tags(TagGroup::Gender).is_empty());
    }

    #[test]
    fn test_validate_reports_every_problem() {
        let mut draft = ItemDraft::default();
        draft.set(ItemField::Quantity, "-1");
        draft.set(ItemField::Cost, "abc");

        let errors = draft.validate(DraftMode::Create).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();

        assert!(fields.contains(&"Name"));
        assert!(fields.contains(&"Description"));
        assert!(fields.contains(&"Item Number"));
        assert!(fields.contains(&"Quantity Available"));
        assert!(fields.contains(&"Cost (GHS)"));
        assert!(fields.contains(&"Images"));
    }

    #[test]
    fn test_validate_edit_does_not_need_uploads() {
        let draft = ItemDraft::from_item(&item());
        assert!(draft.validate(DraftMode::Edit).is_ok());
        assert!(draft.validate(DraftMode::Create).is_err());
    }

    #[test]
    fn test_whitespace_only_required_field_is_rejected() {
        let mut draft = filled_draft();
        draft.set(ItemField::Name, "   ");
        let errors = draft.validate(DraftMode::Create).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("Name", "is required")]);
    }

    #[test]
    fn test_create_payload_contains_all_fields_and_files() {
        let mut draft = filled_draft();
        draft.add_uploads(vec![image("b.png")]);
        let payload = draft.validate(DraftMode::Create).unwrap().into_create_payload();

        assert_eq!(payload.text_value("name"), Some("Air Max 90"));
        assert_eq!(payload.text_value("quantity"), Some("5"));
        assert_eq!(payload.text_value("Gender"), Some(r#"["Men"]"#));
        assert_eq!(payload.text_value("type"), Some("[]"));
        assert_eq!(payload.file_count(), 2);
        assert_eq!(payload.len(), ItemField::ALL.len() + TagGroup::ALL.len() + 2);
    }

    #[test]
    fn test_diff_without_changes_is_empty() {
        let original = item();
        let valid = ItemDraft::from_item(&original).validate(DraftMode::Edit).unwrap();
        assert!(valid.diff(&original).is_empty());
    }

    #[test]
    fn test_diff_sends_only_changed_fields() {
        let original = item();
        let mut draft = ItemDraft::from_item(&original);
        draft.set(ItemField::Quantity, "7");
        draft.set(ItemField::RetailCost, "150");

        let payload = draft.validate(DraftMode::Edit).unwrap().diff(&original);

        assert_eq!(payload.names(), vec!["quantity", "retailCost"]);
        assert_eq!(payload.text_value("quantity"), Some("7"));
        assert_eq!(payload.text_value("retailCost"), Some("150"));
    }

    #[test]
    fn test_diff_tag_sets_ignore_toggle_order() {
        let original = item();
        let mut draft = ItemDraft::from_item(&original);
        draft.toggle(TagGroup::Gender, "Men");
        draft.toggle(TagGroup::Gender, "Men");
        assert!(draft.validate(DraftMode::Edit).unwrap().diff(&original).is_empty());

        draft.toggle(TagGroup::Condition, "Used");
        let payload = draft.validate(DraftMode::Edit).unwrap().diff(&original);
        assert_eq!(payload.names(), vec!["shoeStatus"]);
        assert_eq!(payload.text_value("shoeStatus"), Some(r#"["Brand New","Used"]"#));
    }

    #[test]
    fn test_diff_removed_image_sends_kept_list() {
        let original = item();
        let mut draft = ItemDraft::from_item(&original);
        draft.remove_image(0);

        let payload = draft.validate(DraftMode::Edit).unwrap().diff(&original);

        assert_eq!(payload.names(), vec!["images"]);
        assert_eq!(payload.text_value("images"), Some(r#"["https://cdn/2.png"]"#));
    }

    #[test]
    fn test_diff_new_files_are_always_sent() {
        let original = item();
        let mut draft = ItemDraft::from_item(&original);
        draft.add_uploads(vec![image("c.png"), image("d.png")]);

        let payload = draft.validate(DraftMode::Edit).unwrap().diff(&original);

        assert_eq!(payload.names(), vec!["images", "images"]);
        assert_eq!(payload.file_count(), 2);
    }

    #[test]
    fn test_remove_out_of_range_is_ignored() {
        let mut draft = filled_draft();
        draft.remove_upload(5);
        draft.remove_image(5);
        assert_eq!(draft.uploads.len(), 1);
        draft.remove_upload(0);
        assert!(draft.uploads.is_empty());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut draft = filled_draft();
        draft.reset();
        assert_eq!(draft, ItemDraft::default());
    }
}
