//! DynamoDB-backed schedule storage.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use std::collections::HashMap;

use crate::{Error, Result, Schedule};

const SCHOOL_ID: &str = "school_id";
const HOURS: &str = "hours";

/// Key-value storage for schedule records.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Write the record, replacing any existing one with the same id.
    async fn put(&self, schedule: &Schedule) -> Result<()>;

    /// Read the record for `school_id`, if one exists.
    async fn get(&self, school_id: i64) -> Result<Option<Schedule>>;
}

/// Schedule store backed by a DynamoDB table.
pub struct DynamoStore {
    client: DynamoDbClient,
    table_name: String,
}

impl DynamoStore {
    pub fn new(client: DynamoDbClient, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl ScheduleStore for DynamoStore {
    async fn put(&self, schedule: &Schedule) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(to_item(schedule)))
            .send()
            .await
            .map_err(|e| Error::Store(format!("Failed to put item: {}", e)))?;

        Ok(())
    }

    async fn get(&self, school_id: i64) -> Result<Option<Schedule>> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(SCHOOL_ID, AttributeValue::N(school_id.to_string()))
            .send()
            .await
            .map_err(|e| Error::Store(format!("Failed to get item: {}", e)))?;

        output.item().map(from_item).transpose()
    }
}

/// Marshal a schedule into a DynamoDB item.
pub fn to_item(schedule: &Schedule) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            SCHOOL_ID.to_string(),
            AttributeValue::N(schedule.school_id.to_string()),
        ),
        (HOURS.to_string(), AttributeValue::S(schedule.hours.clone())),
    ])
}

/// Unmarshal a DynamoDB item into a schedule.
pub fn from_item(item: &HashMap<String, AttributeValue>) -> Result<Schedule> {
    let school_id = item
        .get(SCHOOL_ID)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| Error::Store(format!("Item missing numeric {}", SCHOOL_ID)))?
        .parse::<i64>()
        .map_err(|e| Error::Store(format!("Invalid {}: {}", SCHOOL_ID, e)))?;

    // A record written without hours reads back as empty.
    let hours = match item.get(HOURS) {
        Some(value) => value
            .as_s()
            .map_err(|_| Error::Store(format!("Item attribute {} is not a string", HOURS)))?
            .clone(),
        None => String::new(),
    };

    Ok(Schedule { school_id, hours })
}
