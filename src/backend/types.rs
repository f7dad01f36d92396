//! Wire types for the seller search endpoint

use serde::{Deserialize, Deserializer, Serialize};

/// Result cap requested by the form; also the threshold for the
/// "refine your search" warning.
pub const DEFAULT_LIMIT: u32 = 501;

/// Which form field supplies the query value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SearchMode {
    #[serde(rename = "NOM")]
    ByFirstName,
    #[serde(rename = "APE")]
    BySurname,
    #[serde(rename = "COMI")]
    ByCommissionType,
    #[default]
    #[serde(rename = "CLA")]
    ByKey,
}

impl SearchMode {
    pub const ALL: [SearchMode; 4] = [
        SearchMode::ByFirstName,
        SearchMode::BySurname,
        SearchMode::ByCommissionType,
        SearchMode::ByKey,
    ];

    /// Wire code sent as `tipoBusqueda`
    pub fn code(self) -> &'static str {
        match self {
            SearchMode::ByFirstName => "NOM",
            SearchMode::BySurname => "APE",
            SearchMode::ByCommissionType => "COMI",
            SearchMode::ByKey => "CLA",
        }
    }

    /// Tab label shown in the form
    pub fn label(self) -> &'static str {
        match self {
            SearchMode::ByFirstName => "Nombre",
            SearchMode::BySurname => "Apellidos",
            SearchMode::ByCommissionType => "Tipo de Comisión",
            SearchMode::ByKey => "Clave",
        }
    }
}

/// Request body for `POST /api/v1/busqueda/vendedores`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    #[serde(rename = "tipoBusqueda")]
    pub mode: SearchMode,
    #[serde(rename = "valor")]
    pub value: String,
    #[serde(rename = "soloActivos")]
    pub active_only: bool,
    #[serde(rename = "limite", skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// One row of the seller directory
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SellerResult {
    #[serde(rename = "empleado")]
    pub employee_code: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "localidad")]
    pub locality: Option<String>,
    #[serde(rename = "tipocomi")]
    pub commission_type: Option<String>,
    #[serde(rename = "activo")]
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    /// Missing or `null` decodes as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    #[serde(rename = "totalResultados")]
    pub total_count: u32,
    #[serde(rename = "vendedores")]
    pub sellers: Vec<SellerResult>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl SearchResponse {
    /// Failure-shaped response: no rows, zero total
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            total_count: 0,
            sellers: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_uses_wire_names() {
        let request = SearchRequest {
            mode: SearchMode::ByKey,
            value: "CAMT".to_string(),
            active_only: true,
            limit: Some(DEFAULT_LIMIT),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"tipoBusqueda": "CLA", "valor": "CAMT", "soloActivos": true, "limite": 501})
        );
    }

    #[test]
    fn test_request_omits_missing_limit() {
        let request = SearchRequest {
            mode: SearchMode::ByCommissionType,
            value: "CA".to_string(),
            active_only: false,
            limit: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["tipoBusqueda"], "COMI");
        assert!(value.get("limite").is_none());
    }

    #[test]
    fn test_mode_codes_match_serde() {
        for mode in SearchMode::ALL {
            assert_eq!(serde_json::to_value(mode).unwrap(), json!(mode.code()));
        }
    }

    #[test]
    fn test_response_accepts_null_columns() {
        let response: SearchResponse = serde_json::from_value(json!({
            "success": true,
            "message": "Búsqueda exitosa",
            "totalResultados": 1,
            "vendedores": [{
                "empleado": "XYZ",
                "nombre": "SIN DATOS",
                "localidad": null,
                "tipocomi": null,
                "activo": false
            }]
        }))
        .unwrap();
        assert_eq!(response.total_count, 1);
        assert_eq!(response.sellers[0].locality, None);
        assert_eq!(response.sellers[0].commission_type, None);
        assert!(!response.sellers[0].active);
    }

    #[test]
    fn test_response_without_message() {
        let missing: SearchResponse = serde_json::from_value(json!({
            "success": false,
            "totalResultados": 0,
            "vendedores": []
        }))
        .unwrap();
        assert_eq!(missing, SearchResponse::failure(""));

        let null: SearchResponse = serde_json::from_value(json!({
            "success": false,
            "message": null,
            "totalResultados": 0,
            "vendedores": []
        }))
        .unwrap();
        assert_eq!(null.message, "");
    }
}
