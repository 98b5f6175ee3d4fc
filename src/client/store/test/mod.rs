use super::*;

use crate::client::model::{error::ApiError, message::Operation};

use super::notification::outcome_message;

mod notification;
