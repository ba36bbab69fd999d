use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_participating() -> bool {
    true
}

/// A person attached to an expense who may have paid and/or owe a share.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Participant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub amount_paid: f64,
    #[serde(default = "default_participating")]
    pub is_participating: bool,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>, amount_paid: f64, is_participating: bool) -> Self {
        Participant {
            id: id.into(),
            name: name.into(),
            amount_paid,
            is_participating,
        }
    }
}

/// A participant annotated with the share they owe and their net balance.
///
/// `balance > 0` means the participant is owed money, `balance < 0` means
/// they owe money.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ParticipantWithBalance {
    pub id: String,
    pub name: String,
    pub amount_paid: f64,
    pub is_participating: bool,
    pub share: f64,
    pub balance: f64,
}

impl ParticipantWithBalance {
    pub fn from_participant(participant: &Participant, share: f64) -> Self {
        ParticipantWithBalance {
            id: participant.id.clone(),
            name: participant.name.clone(),
            amount_paid: participant.amount_paid,
            is_participating: participant.is_participating,
            share,
            balance: participant.amount_paid - share,
        }
    }
}
