//! # Response Envelopes
//!
//! Standard response shapes for the recipe API.

use serde::Serialize;

/// Paginated list response
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub page: usize,
    pub limit: usize,
    /// Total matches before pagination
    pub total: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(page: usize, limit: usize, total: usize, data: Vec<T>) -> Self {
        Self {
            page,
            limit,
            total,
            data,
        }
    }
}

/// Single record response
#[derive(Debug, Clone, Serialize)]
pub struct SingleResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> SingleResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Delete response
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

impl DeleteResponse {
    pub fn success() -> Self {
        Self { deleted: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_response_serialization() {
        let response = ListResponse::new(2, 5, 17, vec![json!({"id": 1})]);

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["page"], 2);
        assert_eq!(value["limit"], 5);
        assert_eq!(value["total"], 17);
        assert_eq!(value["data"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_single_response_serialization() {
        let response = SingleResponse::new(json!({"title": "Apple Pie"}));

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["data"]["title"], "Apple Pie");
    }

    #[test]
    fn test_delete_response() {
        let value = serde_json::to_value(DeleteResponse::success()).unwrap();
        assert_eq!(value["deleted"], true);
    }
}
