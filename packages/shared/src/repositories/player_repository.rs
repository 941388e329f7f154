use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use serde_dynamo::{from_items, to_item};

use crate::models::player::Player;
use crate::repositories::errors::player_repository_errors::PlayerRepositoryError;

#[cfg(test)]
use mockall::automock;

pub struct DynamoDbPlayerRepository {
    pub client: Client,
    pub table_name: String,
    pub user_index: String,
}

impl DynamoDbPlayerRepository {
    pub fn new(
        client: Client,
        table_name: impl Into<String>,
        user_index: impl Into<String>,
    ) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            user_index: user_index.into(),
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn create_player(&self, player: &Player) -> Result<(), PlayerRepositoryError>;
    async fn list_players_by_user(&self, user_id: &str)
        -> Result<Vec<Player>, PlayerRepositoryError>;
}

#[async_trait]
impl PlayerRepository for DynamoDbPlayerRepository {
    async fn create_player(&self, player: &Player) -> Result<(), PlayerRepositoryError> {
        let item =
            to_item(player).map_err(|e| PlayerRepositoryError::Serialization(e.to_string()))?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(id)")
            .send()
            .await
            .map_err(|e| PlayerRepositoryError::DynamoDb(e.to_string()))?;

        Ok(())
    }

    async fn list_players_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<Player>, PlayerRepositoryError> {
        let mut players: Vec<Player> = Vec::new();
        let mut start_key = None;
        loop {
            let output = self
                .client
                .query()
                .table_name(&self.table_name)
                .index_name(&self.user_index)
                .key_condition_expression("userId = :user_id")
                .expression_attribute_values(":user_id", AttributeValue::S(user_id.to_string()))
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(|e| PlayerRepositoryError::DynamoDb(e.to_string()))?;

            if let Some(items) = output.items {
                let page: Vec<Player> = from_items(items)
                    .map_err(|e| PlayerRepositoryError::Serialization(e.to_string()))?;
                players.extend(page);
            }

            start_key = output.last_evaluated_key;
            if start_key.is_none() {
                break;
            }
        }

        Ok(players)
    }
}
