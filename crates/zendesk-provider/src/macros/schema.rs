//! Declared attributes of a macro
//!
//! <https://developer.zendesk.com/api-reference/ticketing/business-rules/macros/>

use zendesk_provider_sdk::{Attribute, AttributeType, Schema, Value};

pub const RESOURCE_TYPE: &str = "zendesk_macro";

pub const URL: &str = "url";
pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const POSITION: &str = "position";
pub const RESTRICTION: &str = "restriction";
pub const ACTIVE: &str = "active";
pub const ACTIONS: &str = "actions";
pub const ACTION_FIELD: &str = "field";
pub const ACTION_VALUE: &str = "value";

/// Schema of one entry of `actions`
pub fn action_schema() -> Schema {
    Schema::new("A ticket field update performed by the macro.")
        .with_attribute(
            ACTION_FIELD,
            Attribute::required(AttributeType::String)
                .with_description("The field of the action."),
        )
        .with_attribute(
            ACTION_VALUE,
            Attribute::required(AttributeType::String)
                .with_description("The value of the action."),
        )
}

pub fn macro_schema() -> Schema {
    Schema::new("Provides a macro resource.")
        .with_attribute(
            URL,
            Attribute::computed(AttributeType::String).with_description("The URL for this macro."),
        )
        .with_attribute(
            TITLE,
            Attribute::required(AttributeType::String).with_description("The title of the macro."),
        )
        .with_attribute(
            DESCRIPTION,
            Attribute::optional(AttributeType::String)
                .with_description("The description of the macro."),
        )
        .with_attribute(
            POSITION,
            Attribute::optional(AttributeType::Int).with_description("The position of the macro."),
        )
        .with_attribute(
            RESTRICTION,
            Attribute::optional(AttributeType::String)
                .with_description("The restriction of the macro."),
        )
        .with_attribute(
            ACTIVE,
            Attribute::optional(AttributeType::Bool)
                .with_description("The active status of the macro.")
                .with_default(Value::Bool(true)),
        )
        .with_attribute(
            ACTIONS,
            Attribute::required(AttributeType::List(Box::new(action_schema())))
                .with_description("The actions of the macro."),
        )
}
