use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::NarratorId,
    narrator::{
        event::{CreateNarrator, UpdateNarrator},
        Narrator,
    },
};
use serde::{Deserialize, Serialize};

use super::double_option;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateNarratorRequest {
    #[garde(length(min = 1, max = 255))]
    pub name: String,
    #[garde(skip)]
    pub bio: Option<String>,
}

impl From<CreateNarratorRequest> for CreateNarrator {
    fn from(value: CreateNarratorRequest) -> Self {
        let CreateNarratorRequest { name, bio } = value;
        Self { name, bio }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateNarratorRequest {
    #[garde(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[garde(skip)]
    #[serde(default, deserialize_with = "double_option")]
    pub bio: Option<Option<String>>,
}

#[derive(new)]
pub struct UpdateNarratorRequestWithId(NarratorId, UpdateNarratorRequest);

impl From<UpdateNarratorRequestWithId> for UpdateNarrator {
    fn from(value: UpdateNarratorRequestWithId) -> Self {
        let UpdateNarratorRequestWithId(narrator_id, req) = value;
        Self {
            narrator_id,
            name: req.name,
            bio: req.bio,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NarratorResponse {
    pub narrator_id: NarratorId,
    pub name: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Narrator> for NarratorResponse {
    fn from(value: Narrator) -> Self {
        let Narrator {
            id,
            name,
            bio,
            created_at,
        } = value;
        Self {
            narrator_id: id,
            name,
            bio,
            created_at,
        }
    }
}
