use crate::models::poll_models::Poll;
use crate::store::PollStore;
use crate::utils::error::{AppError, AppResult};
use crate::utils::validation::parse_object_id;

/// Vote count for the leading choice of a poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadingChoice {
    pub title: String,
    pub votes: u64,
}

#[derive(Debug, Clone)]
pub struct PollResult {
    pub poll: Poll,
    /// `None` only when the poll has no choices at all. With choices but
    /// no votes, the first choice leads with zero votes.
    pub leading: Option<LeadingChoice>,
}

/// Tallies votes per choice and picks the leader. Ties resolve to the
/// first choice encountered in store order: a later choice only takes the
/// lead with a strictly greater count.
pub async fn poll_result(store: &dyn PollStore, poll_id: &str) -> AppResult<PollResult> {
    let poll_id = parse_object_id(poll_id, "poll")?;

    let poll = store
        .find_poll(poll_id)
        .await?
        .ok_or_else(|| AppError::PollNotFound(poll_id.to_hex()))?;

    let choices = store.list_choices(poll_id).await?;

    let mut leading: Option<LeadingChoice> = None;
    for choice in &choices {
        let votes = store.count_votes(choice.id).await?;
        let ahead = match &leading {
            Some(current) => votes > current.votes,
            None => true,
        };
        if ahead {
            leading = Some(LeadingChoice {
                title: choice.title.clone(),
                votes,
            });
        }
    }

    Ok(PollResult { poll, leading })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::polls::{create_choice, create_poll};
    use crate::core::test_support::{seed_choice, seed_poll};
    use crate::core::votes::record_vote;
    use crate::store::memory::MemoryStore;
    use mongodb::bson::oid::ObjectId;

    async fn cast(store: &MemoryStore, choice_id: ObjectId, n: u64) {
        for _ in 0..n {
            record_vote(store, &choice_id.to_hex()).await.unwrap();
        }
    }

    #[tokio::test]
    async fn unknown_poll_is_reported() {
        let store = MemoryStore::new();
        let err = poll_result(&store, &ObjectId::new().to_hex())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::PollNotFound(_)));
    }

    #[tokio::test]
    async fn poll_without_choices_yields_no_leader() {
        let store = MemoryStore::new();
        let poll = seed_poll(&store, "Best color", 1).await;

        let result = poll_result(&store, &poll.id.to_hex()).await.unwrap();
        assert_eq!(result.poll.title, "Best color");
        assert!(result.leading.is_none());
    }

    #[tokio::test]
    async fn zero_votes_everywhere_leads_with_the_first_choice() {
        let store = MemoryStore::new();
        let poll = seed_poll(&store, "Best color", 1).await;
        seed_choice(&store, &poll, "Red").await;
        seed_choice(&store, &poll, "Blue").await;

        let result = poll_result(&store, &poll.id.to_hex()).await.unwrap();
        assert_eq!(
            result.leading,
            Some(LeadingChoice {
                title: "Red".to_string(),
                votes: 0
            })
        );
    }

    #[tokio::test]
    async fn later_choice_needs_a_strictly_greater_count() {
        let store = MemoryStore::new();
        let poll = seed_poll(&store, "Best color", 1).await;
        let a = seed_choice(&store, &poll, "Red").await;
        let b = seed_choice(&store, &poll, "Green").await;
        let c = seed_choice(&store, &poll, "Blue").await;

        cast(&store, a.id, 3).await;
        cast(&store, b.id, 3).await;
        cast(&store, c.id, 5).await;

        let result = poll_result(&store, &poll.id.to_hex()).await.unwrap();
        assert_eq!(
            result.leading,
            Some(LeadingChoice {
                title: "Blue".to_string(),
                votes: 5
            })
        );
    }

    #[tokio::test]
    async fn ties_resolve_to_the_first_choice_seen() {
        let store = MemoryStore::new();
        let poll = seed_poll(&store, "Best color", 1).await;
        let a = seed_choice(&store, &poll, "Red").await;
        let b = seed_choice(&store, &poll, "Green").await;
        let c = seed_choice(&store, &poll, "Blue").await;

        cast(&store, a.id, 5).await;
        cast(&store, b.id, 5).await;
        cast(&store, c.id, 3).await;

        let result = poll_result(&store, &poll.id.to_hex()).await.unwrap();
        assert_eq!(
            result.leading,
            Some(LeadingChoice {
                title: "Red".to_string(),
                votes: 5
            })
        );
    }

    #[tokio::test]
    async fn end_to_end_best_color() {
        let store = MemoryStore::new();

        let poll = create_poll(&store, "Best color", Some("")).await.unwrap();
        let red = create_choice(&store, "Red", &poll.id.to_hex()).await.unwrap();

        let dup = create_choice(&store, "Red", &poll.id.to_hex()).await;
        assert!(matches!(dup, Err(AppError::DuplicateChoice(_))));

        record_vote(&store, &red.id.to_hex()).await.unwrap();
        record_vote(&store, &red.id.to_hex()).await.unwrap();

        let result = poll_result(&store, &poll.id.to_hex()).await.unwrap();
        assert_eq!(result.poll.title, "Best color");
        assert_eq!(
            result.leading,
            Some(LeadingChoice {
                title: "Red".to_string(),
                votes: 2
            })
        );
    }
}
