//! Catalog Models
//!
//! Records and request/response bodies exchanged with the backend.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned record identifier.
///
/// Opaque to the client; only its string form is ever inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CarroId {
    Number(i64),
    Text(String),
}

impl fmt::Display for CarroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarroId::Number(n) => write!(f, "{}", n),
            CarroId::Text(s) => f.write_str(s),
        }
    }
}

/// One catalog entry ("carro")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carro {
    #[serde(default)]
    pub id: Option<CarroId>,
    #[serde(default)]
    pub modelo: String,
    #[serde(default, deserialize_with = "lenient_price")]
    pub preco: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Prices stored by older clients may be strings; anything unreadable is 0.
fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// `getCarro` answers with either an array or a single record.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum OneOrMany {
    Many(Vec<Carro>),
    One(Carro),
}

impl From<OneOrMany> for Vec<Carro> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::Many(list) => list,
            OneOrMany::One(carro) => vec![carro],
        }
    }
}

// ========================
// Request Bodies
// ========================

#[derive(Debug, Serialize)]
pub struct ModeloArgs<'a> {
    pub modelo: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SaveCarroArgs<'a> {
    pub modelo: &'a str,
    pub preco: f64,
    pub image: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct UpdateCarroArgs<'a> {
    pub modelo: &'a str,
    pub preco: f64,
}

// ========================
// Response Bodies
// ========================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadedImage {
    pub filename: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DeleteAck {
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub carros: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_list_payload() {
        let json = r#"[{"id":1,"modelo":"Civic","preco":95000},
                       {"id":"x-2","modelo":"Corolla","preco":"120000.5","image":"1_c.png"}]"#;
        let list: Vec<Carro> = serde_json::from_str(json).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, Some(CarroId::Number(1)));
        assert_eq!(list[0].image, None);
        assert_eq!(list[1].id.as_ref().map(|id| id.to_string()), Some("x-2".to_string()));
        assert_eq!(list[1].preco, 120000.5);
        assert_eq!(list[1].image.as_deref(), Some("1_c.png"));
    }

    #[test]
    fn test_unreadable_price_is_zero() {
        let carro: Carro = serde_json::from_str(r#"{"modelo":"Gol","preco":"abc"}"#).unwrap();
        assert_eq!(carro.preco, 0.0);
        assert_eq!(carro.id, None);
    }

    #[test]
    fn test_get_response_single_object_becomes_collection() {
        let one: OneOrMany = serde_json::from_str(r#"{"id":3,"modelo":"Uno","preco":1}"#).unwrap();
        let list: Vec<Carro> = one.into();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].modelo, "Uno");
    }

    #[test]
    fn test_save_args_send_null_image() {
        let args = SaveCarroArgs { modelo: "Civic", preco: 10.0, image: None };
        let json = serde_json::to_value(&args).unwrap();
        assert_eq!(json, serde_json::json!({"modelo": "Civic", "preco": 10.0, "image": null}));
    }

    #[test]
    fn test_modelo_and_update_args_bodies() {
        let json = serde_json::to_value(&ModeloArgs { modelo: "Civic" }).unwrap();
        assert_eq!(json, serde_json::json!({"modelo": "Civic"}));

        let json = serde_json::to_value(&UpdateCarroArgs { modelo: "Civic", preco: 5.5 }).unwrap();
        assert_eq!(json, serde_json::json!({"modelo": "Civic", "preco": 5.5}));
    }
}
