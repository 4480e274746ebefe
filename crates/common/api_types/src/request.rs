use serde::{Deserialize, Serialize};

use crate::validator::ValidatorID;

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidatorsPostRequest {
    pub ids: Vec<ValidatorID>,
}
