// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `aws_athena_database` resource.
//!
//! Every lifecycle method runs one statement and polls it to completion:
//!
//! | Method | Statement | Expected result |
//! |--------|-----------|-----------------|
//! | create | `create database <name>;` | no rows |
//! | read | `show databases;` | a row equal to `<name>` |
//! | update | none | |
//! | delete | `drop database <name>[ cascade];` | no rows |
//!
//! Results are written to `s3://<bucket>`.

use structprovider::{Identifier, Reader, Record, Resource, Updater, async_trait};
use tracing::debug;

use crate::{
    client::{AwsClient, ResultSet, query_state},
    error::AwsError,
    wait::StateChange
};

/// An Athena database.
#[derive(Debug, Default, Clone, PartialEq, Eq, Record)]
#[record(updater, meta = "AwsClient", error = "AwsError")]
pub struct AthenaDatabase {
    /// Database name.
    #[tf(",required,forcenew")]
    pub name: String,

    /// Bucket receiving query results.
    #[tf(",required,forcenew")]
    pub bucket: String,

    /// Drop tables along with the database.
    #[tf(",optional")]
    pub force_destroy: bool
}

impl AthenaDatabase {
    fn output_location(&self) -> String {
        format!("s3://{}", self.bucket)
    }

    fn drop_statement(&self) -> String {
        let cascade = if self.force_destroy { " cascade" } else { "" };
        format!("drop database {}{cascade};", self.name)
    }

    async fn execute(&self, client: &AwsClient, query: &str) -> Result<ResultSet, AwsError> {
        let execution_id = client
            .athena
            .start_query_execution(query, &self.output_location())
            .await?;
        debug!(database = %self.name, execution_id = %execution_id, query, "query started");
        query_execution_result(client, &execution_id).await
    }
}

impl Identifier for AthenaDatabase {
    fn id(&self) -> String {
        self.name.clone()
    }
}

#[async_trait]
impl Reader for AthenaDatabase {
    async fn read(&mut self, client: &AwsClient) -> Result<(), AwsError> {
        let rs = self.execute(client, "show databases;").await?;
        if rs.values().any(|value| value == self.name) {
            Ok(())
        } else {
            Err(AwsError::DatabaseNotFound {
                name:   self.name.clone(),
                result: rs.flatten()
            })
        }
    }
}

#[async_trait]
impl Resource for AthenaDatabase {
    async fn create(&mut self, client: &AwsClient) -> Result<(), AwsError> {
        let rs = self.execute(client, &format!("create database {};", self.name)).await?;
        expect_no_rows("create", &rs)
    }

    async fn delete(&mut self, client: &AwsClient) -> Result<(), AwsError> {
        let rs = self.execute(client, &self.drop_statement()).await?;
        expect_no_rows("drop", &rs)
    }
}

#[async_trait]
impl Updater for AthenaDatabase {
    async fn update(&mut self, _client: &AwsClient) -> Result<(), AwsError> {
        Ok(())
    }
}

fn expect_no_rows(statement: &'static str, rs: &ResultSet) -> Result<(), AwsError> {
    if rs.rows.is_empty() {
        Ok(())
    } else {
        Err(AwsError::UnexpectedResult {
            statement,
            result: rs.flatten()
        })
    }
}

/// Poll an execution until it succeeds, then fetch its results.
async fn query_execution_result(client: &AwsClient, execution_id: &str) -> Result<ResultSet, AwsError> {
    let change = StateChange {
        pending: &[query_state::QUEUED, query_state::RUNNING],
        target:  &[query_state::SUCCEEDED],
        config:  client.poll
    };

    change
        .wait(move || async move {
            let status = client.athena.get_query_execution(execution_id).await?;
            match status.state_change_reason {
                Some(reason) if status.state == query_state::FAILED => {
                    Err(AwsError::QueryFailed {
                        reason
                    })
                }
                _ => Ok(((), status.state))
            }
        })
        .await?;

    client.athena.get_query_results(execution_id).await
}
