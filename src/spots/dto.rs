use serde::{Deserialize, Serialize};

/// Request body for creating a spot (admin only).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpotRequest {
    pub spot_number: i32,
    pub floor: i32,
}

/// Request body for assigning a spot to a user.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignSpotRequest {
    pub user_id: i32,
    pub occupancy_time: i32,
}

/// Response returned after spot creation.
#[derive(Debug, Serialize)]
pub struct CreateSpotResponse {
    pub id: i32,
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_deserialize_camel_case() {
        let req: CreateSpotRequest =
            serde_json::from_str(r#"{"spotNumber":7,"floor":2}"#).expect("valid body");
        assert_eq!(req.spot_number, 7);
        assert_eq!(req.floor, 2);

        let req: AssignSpotRequest =
            serde_json::from_str(r#"{"userId":3,"occupancyTime":0}"#).expect("valid body");
        assert_eq!(req.user_id, 3);
        assert_eq!(req.occupancy_time, 0);
    }
}
