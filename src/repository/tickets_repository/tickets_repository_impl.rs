use super::{
    entity::{CounterEntity, TicketEntity},
    InsertedTicket, Ticket, TicketsRepository,
};
use crate::repository::{self, Error};
use axum::async_trait;
use bson::{doc, Document};
use futures_util::TryStreamExt;
use mongodb::{
    error::ErrorKind, options::IndexOptions, options::ReturnDocument, Database, IndexModel,
};
use std::sync::Arc;

const TICKETS: &str = "tickets";
const COUNTERS: &str = "counters";
const INDEX_NAME_USER: &str = "index_user";

pub struct TicketsRepositoryImpl {
    database: Database,
}

impl TicketsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection_names = database.list_collection_names().await?;
        if !collection_names.iter().any(|name| name == TICKETS) {
            tracing::debug!(collection = TICKETS, "creating collection");
            database.create_collection(TICKETS).await?;
        }

        let collection = database.collection::<Document>(TICKETS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_USER.to_string()) {
            collection
                .create_index(
                    IndexModel::builder()
                        .keys(doc! {
                            "user": 1,
                        })
                        .options(
                            IndexOptions::builder()
                                .name(INDEX_NAME_USER.to_string())
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(collection = TICKETS, index = INDEX_NAME_USER, "created index");
        }

        Ok(Self { database })
    }

    async fn next_id(&self) -> Result<i64, repository::Error> {
        let counter = self
            .database
            .collection::<CounterEntity>(COUNTERS)
            .find_one_and_update(
                doc! {
                    "_id": TICKETS,
                },
                doc! {
                    "$inc": {
                        "seq": 1_i64,
                    }
                },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?;

        match counter {
            Some(CounterEntity { seq }) => Ok(seq),
            None => Err(Error::Mongo(
                ErrorKind::Custom(Arc::new("tickets counter not returned")).into(),
            )),
        }
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn find(&self, id: i64) -> Result<Option<Ticket>, repository::Error> {
        let ticket = self
            .database
            .collection::<TicketEntity>(TICKETS)
            .find_one(doc! {
                "_id": id,
            })
            .await?
            .map(Ticket::from);

        Ok(ticket)
    }

    async fn find_all(&self) -> Result<Vec<Ticket>, repository::Error> {
        let tickets = self
            .database
            .collection::<TicketEntity>(TICKETS)
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await?
            .map_ok(Ticket::from)
            .try_collect()
            .await?;

        Ok(tickets)
    }

    async fn find_by_user(&self, user: &str) -> Result<Vec<Ticket>, repository::Error> {
        let tickets = self
            .database
            .collection::<TicketEntity>(TICKETS)
            .find(doc! {
                "user": user,
            })
            .sort(doc! { "_id": 1 })
            .await?
            .map_ok(Ticket::from)
            .try_collect()
            .await?;

        Ok(tickets)
    }

    async fn insert(&self, ticket: InsertedTicket) -> Result<Ticket, repository::Error> {
        let id = self.next_id().await?;

        let insert_entity = TicketEntity {
            _id: id,
            user: ticket.user,
            status: ticket.status,
            created_at: ticket.created_at.into(),
            updated_at: ticket.updated_at.into(),
        };

        self.database
            .collection::<TicketEntity>(TICKETS)
            .insert_one(&insert_entity)
            .await?;

        // Returned from the entity so timestamps have the same
        // millisecond precision as the stored ones
        Ok(Ticket::from(insert_entity))
    }

    async fn update(&self, ticket: &Ticket) -> Result<Ticket, repository::Error> {
        let update_entity = TicketEntity::from(ticket);

        let update_result = self
            .database
            .collection::<TicketEntity>(TICKETS)
            .replace_one(
                doc! {
                    "_id": ticket.id,
                },
                &update_entity,
            )
            .await?;

        match update_result.matched_count == 1 {
            true => Ok(Ticket::from(update_entity)),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn delete(&self, ticket: &Ticket) -> Result<(), repository::Error> {
        let delete_result = self
            .database
            .collection::<Document>(TICKETS)
            .delete_one(doc! {
                "_id": ticket.id,
            })
            .await?;

        match delete_result.deleted_count == 1 {
            true => Ok(()),
            false => Err(Error::NoDocumentUpdated),
        }
    }

    async fn count(&self) -> Result<u64, repository::Error> {
        let count = self
            .database
            .collection::<Document>(TICKETS)
            .count_documents(doc! {})
            .await?;

        Ok(count)
    }
}
