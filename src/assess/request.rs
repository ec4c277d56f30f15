//! Lead-qualification input.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error_handling::InputError;
use crate::format::normalize;

/// A lead as submitted: every field optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LeadRequest {
    pub email: Option<String>,
    pub domain: Option<String>,
    pub name: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub phone: Option<String>,
}

/// Phone numbers arrive both quoted and as bare JSON numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Phone {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Phone>::deserialize(deserializer)?.map(|phone| match phone {
        Phone::Text(text) => text,
        Phone::Number(number) => number.to_string(),
    }))
}

impl LeadRequest {
    /// Parses a lead from a JSON object with optional `email`, `domain`, `name`
    /// and `phone` keys. `phone` may be a string or a number; unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// - `InputError::EmptyRequest` for blank input or an object with none of the four fields
    /// - `InputError::MalformedRequest` for anything that is not a JSON object of that shape
    pub fn from_json(input: &str) -> Result<Self, InputError> {
        if input.trim().is_empty() {
            return Err(InputError::EmptyRequest);
        }
        let value: Value = serde_json::from_str(input)
            .map_err(|e| InputError::MalformedRequest(e.to_string()))?;
        // A derived struct would also accept a positional array
        if !value.is_object() {
            return Err(InputError::MalformedRequest(
                "expected a JSON object".to_string(),
            ));
        }
        let request = serde_json::from_value::<Self>(value)
            .map_err(|e| InputError::MalformedRequest(e.to_string()))?
            .normalized();

        if request.is_empty() {
            return Err(InputError::EmptyRequest);
        }
        Ok(request)
    }

    /// Lower-cases and trims email and domain, trims name and phone, and drops
    /// fields that end up blank.
    pub fn normalized(&self) -> Self {
        fn non_blank(value: String) -> Option<String> {
            (!value.is_empty()).then_some(value)
        }
        Self {
            email: self.email.as_deref().map(normalize).and_then(non_blank),
            domain: self.domain.as_deref().map(normalize).and_then(non_blank),
            name: self
                .name
                .as_deref()
                .map(|n| n.trim().to_string())
                .and_then(non_blank),
            phone: self
                .phone
                .as_deref()
                .map(|p| p.trim().to_string())
                .and_then(non_blank),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.domain.is_none() && self.name.is_none() && self.phone.is_none()
    }
}
