use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};

/// Field name to the list of reasons it was rejected.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

const NULL_MESSAGE: &str = "This field may not be null.";
const BLANK_MESSAGE: &str = "This field may not be blank.";

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed(BLANK_MESSAGE)));
    }
    Ok(())
}

/// Raw body of `POST /generate-product/`. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct GenerateProductRequest {
    #[serde(default)]
    #[validate(required(message = "This field is required."), custom(function = "not_blank"))]
    pub product_description: Option<String>,
    #[serde(default)]
    #[validate(required(message = "This field is required."), custom(function = "not_blank"))]
    pub vibe_words: Option<String>,
    /// Fields sent as an explicit `null`.
    #[serde(skip)]
    null_fields: Vec<&'static str>,
}

const FIELDS: [&str; 2] = ["product_description", "vibe_words"];

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

impl GenerateProductRequest {
    /// Reads the request from a decoded JSON body, which must be an object.
    pub fn from_body(body: Value) -> Result<Self, String> {
        let Value::Object(map) = body else {
            return Err(format!(
                "Invalid data. Expected a dictionary, but got {}.",
                json_type(&body)
            ));
        };

        let null_fields = FIELDS
            .into_iter()
            .filter(|field| map.get(*field).is_some_and(Value::is_null))
            .collect();

        let mut request: Self =
            serde_json::from_value(Value::Object(map)).map_err(|e| e.to_string())?;
        request.null_fields = null_fields;
        Ok(request)
    }

    /// Validates the body and yields the trimmed generation input.
    pub fn into_generation_request(self) -> Result<GenerationRequest, FieldErrors> {
        if let Err(e) = self.validate() {
            let mut errors = field_errors(&e);
            for field in &self.null_fields {
                errors.insert(field.to_string(), vec![NULL_MESSAGE.to_string()]);
            }
            return Err(errors);
        }

        // Both fields are Some after validation.
        Ok(GenerationRequest {
            product_description: self.product_description.unwrap_or_default().trim().to_string(),
            vibe_words: self.vibe_words.unwrap_or_default().trim().to_string(),
        })
    }
}

fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map_or_else(|| e.code.to_string(), |message| message.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

/// Validated input for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub product_description: String,
    pub vibe_words: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub product_names: Vec<String>,
    pub tv_ad_young_adults: String,
    pub facebook_ad_parents: String,
    pub radio_ad_parents: String,
    pub safety_warning: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub detail: String,
}
