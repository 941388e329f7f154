use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use chrono::Utc;
use serde_dynamo::{from_item, from_items, to_attribute_value, to_item};

use crate::models::tournament::Tournament;
use crate::repositories::errors::tournament_repository_errors::TournamentRepositoryError;

#[cfg(test)]
use mockall::automock;

pub struct DynamoDbTournamentRepository {
    pub client: Client,
    pub table_name: String,
}

impl DynamoDbTournamentRepository {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait TournamentRepository: Send + Sync {
    /// At most `limit` tournaments, newest `created_at` first.
    async fn list_recent(&self, limit: i32) -> Result<Vec<Tournament>, TournamentRepositoryError>;
    async fn get_tournament(
        &self,
        tournament_id: &str,
    ) -> Result<Option<Tournament>, TournamentRepositoryError>;
    async fn create_tournament(&self, tournament: &Tournament)
        -> Result<(), TournamentRepositoryError>;
    /// Overwrites the registered player count. `NotFound` if the id does not exist.
    async fn update_registered_players(
        &self,
        tournament_id: &str,
        registered_players: u32,
    ) -> Result<(), TournamentRepositoryError>;
}

/// Sorts newest first and keeps the first `limit` entries.
pub(crate) fn most_recent(mut tournaments: Vec<Tournament>, limit: i32) -> Vec<Tournament> {
    tournaments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    tournaments.truncate(limit.max(0) as usize);
    tournaments
}

#[async_trait]
impl TournamentRepository for DynamoDbTournamentRepository {
    async fn list_recent(&self, limit: i32) -> Result<Vec<Tournament>, TournamentRepositoryError> {
        // Scan order is undefined, so the whole table is read before sorting.
        let mut tournaments: Vec<Tournament> = Vec::new();
        let mut start_key = None;
        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(|e| TournamentRepositoryError::DynamoDb(e.to_string()))?;

            if let Some(items) = output.items {
                let page: Vec<Tournament> = from_items(items)
                    .map_err(|e| TournamentRepositoryError::Serialization(e.to_string()))?;
                tournaments.extend(page);
            }

            start_key = output.last_evaluated_key;
            if start_key.is_none() {
                break;
            }
        }

        Ok(most_recent(tournaments, limit))
    }

    async fn get_tournament(
        &self,
        tournament_id: &str,
    ) -> Result<Option<Tournament>, TournamentRepositoryError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(tournament_id.to_string()))
            .send()
            .await
            .map_err(|e| TournamentRepositoryError::DynamoDb(e.to_string()))?;

        match output.item {
            Some(item) => {
                let tournament: Tournament = from_item(item)
                    .map_err(|e| TournamentRepositoryError::Serialization(e.to_string()))?;
                Ok(Some(tournament))
            }
            None => Ok(None),
        }
    }

    async fn create_tournament(
        &self,
        tournament: &Tournament,
    ) -> Result<(), TournamentRepositoryError> {
        let item = to_item(tournament)
            .map_err(|e| TournamentRepositoryError::Serialization(e.to_string()))?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| TournamentRepositoryError::DynamoDb(e.to_string()))?;

        Ok(())
    }

    async fn update_registered_players(
        &self,
        tournament_id: &str,
        registered_players: u32,
    ) -> Result<(), TournamentRepositoryError> {
        let updated_at: AttributeValue = to_attribute_value(Utc::now())
            .map_err(|e| TournamentRepositoryError::Serialization(e.to_string()))?;

        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key("id", AttributeValue::S(tournament_id.to_string()))
            .update_expression("SET registeredPlayers = :count, updatedAt = :updated_at")
            .expression_attribute_values(":count", AttributeValue::N(registered_players.to_string()))
            .expression_attribute_values(":updated_at", updated_at)
            .condition_expression("attribute_exists(id)")
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                let service_error = e.into_service_error();
                if service_error.is_conditional_check_failed_exception() {
                    Err(TournamentRepositoryError::NotFound)
                } else {
                    Err(TournamentRepositoryError::DynamoDb(service_error.to_string()))
                }
            }
        }
    }
}
