// SPDX-FileCopyrightText: 2026 Lumeo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Operations on the hosted `blog_posts` collection.

use async_trait::async_trait;
use chrono::Utc;

use lumeo_core::error::LumeoError;
use lumeo_core::traits::ContentStore;
use lumeo_core::types::{BlogPost, NewPost, PostId, PostPatch};

use crate::client::{error_from_response, transport_error, BackendClient};

const COLLECTION: &str = "blog_posts";

/// Scalar function incrementing a post's view counter atomically on the
/// backend and returning the new value.
const INCREMENT_VIEWS_FN: &str = "increment_post_views";

/// Typed handle on the remote `blog_posts` collection.
#[derive(Debug, Clone)]
pub struct PostCollection {
    client: BackendClient,
}

impl PostCollection {
    pub(crate) fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// All posts including drafts, newest publish date first.
    pub async fn list_all(&self) -> Result<Vec<BlogPost>, LumeoError> {
        let response = self
            .client
            .http()
            .get(self.client.collection_url(COLLECTION))
            .query(&[("select", "*"), ("order", "published_at.desc.nullslast")])
            .send()
            .await
            .map_err(transport_error)?;
        self.client.rows(COLLECTION, response).await
    }

    /// Published posts only, newest publish date first.
    pub async fn list_published(&self) -> Result<Vec<BlogPost>, LumeoError> {
        let response = self
            .client
            .http()
            .get(self.client.collection_url(COLLECTION))
            .query(&[
                ("select", "*"),
                ("published", "eq.true"),
                ("order", "published_at.desc"),
            ])
            .send()
            .await
            .map_err(transport_error)?;
        self.client.rows(COLLECTION, response).await
    }

    /// Slug lookup. `Ok(None)` on miss; an error only when the
    /// uniqueness invariant is violated (two or more rows share the
    /// slug) or the request itself fails.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, LumeoError> {
        let response = self
            .client
            .http()
            .get(self.client.collection_url(COLLECTION))
            .query(&[("select", "*".to_string()), ("slug", format!("eq.{slug}"))])
            .send()
            .await
            .map_err(transport_error)?;
        let mut rows: Vec<BlogPost> = self.client.rows(COLLECTION, response).await?;

        if rows.len() > 1 {
            return Err(LumeoError::backend(format!(
                "slug `{slug}` matches {} posts; slugs must be unique",
                rows.len()
            )));
        }
        Ok(rows.pop())
    }

    /// Inserts a post and returns the stored record.
    pub async fn create(&self, post: NewPost) -> Result<BlogPost, LumeoError> {
        let response = self
            .client
            .http()
            .post(self.client.collection_url(COLLECTION))
            .header("Prefer", "return=representation")
            .json(&post)
            .send()
            .await
            .map_err(transport_error)?;
        let rows: Vec<BlogPost> = self.client.rows(COLLECTION, response).await?;
        rows.into_iter().next().ok_or_else(|| {
            LumeoError::backend("backend accepted the insert but returned no representation")
        })
    }

    /// Merges the patch, stamps `updated_at`, returns the updated record.
    pub async fn update(&self, id: &PostId, patch: PostPatch) -> Result<BlogPost, LumeoError> {
        let mut body = serde_json::to_value(&patch).map_err(|e| {
            LumeoError::Internal(format!("failed to serialize post patch: {e}"))
        })?;
        body["updated_at"] = serde_json::json!(Utc::now());

        let response = self
            .client
            .http()
            .patch(self.client.collection_url(COLLECTION))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;
        let rows: Vec<BlogPost> = self.client.rows(COLLECTION, response).await?;
        rows.into_iter().next().ok_or_else(|| LumeoError::NotFound {
            entity: "blog post",
            key: id.to_string(),
        })
    }

    /// Permanently removes the post. Fails with `NotFound` when absent.
    pub async fn delete(&self, id: &PostId) -> Result<(), LumeoError> {
        let response = self
            .client
            .http()
            .delete(self.client.collection_url(COLLECTION))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_from_response(COLLECTION, response).await);
        }
        let rows: Vec<serde_json::Value> =
            response.json().await.map_err(|e| LumeoError::Network {
                message: format!("failed to read backend response body: {e}"),
                source: Some(Box::new(e)),
            })?;
        if rows.is_empty() {
            return Err(LumeoError::NotFound {
                entity: "blog post",
                key: id.to_string(),
            });
        }
        Ok(())
    }

    /// Increments the view counter by exactly one via the dedicated
    /// backend function and returns the new value. Ordinary reads never
    /// touch the counter.
    pub async fn increment_views(&self, id: &PostId) -> Result<u64, LumeoError> {
        let response = self
            .client
            .http()
            .post(self.client.rpc_url(INCREMENT_VIEWS_FN))
            .json(&serde_json::json!({ "post_id": id.0 }))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_from_response(COLLECTION, response).await);
        }
        response.json::<u64>().await.map_err(|e| {
            LumeoError::backend(format!("failed to parse view counter response: {e}"))
        })
    }
}

#[async_trait]
impl ContentStore for PostCollection {
    async fn list_all(&self) -> Result<Vec<BlogPost>, LumeoError> {
        PostCollection::list_all(self).await
    }

    async fn list_published(&self) -> Result<Vec<BlogPost>, LumeoError> {
        PostCollection::list_published(self).await
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, LumeoError> {
        PostCollection::get_by_slug(self, slug).await
    }

    async fn increment_views(&self, id: &PostId) -> Result<u64, LumeoError> {
        PostCollection::increment_views(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn post_json(id: &str, slug: &str, views: u64) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "slug": slug,
            "title": "A Post",
            "excerpt": "Short.",
            "content": "# Heading\nBody text.",
            "author": "Elena Vasquez",
            "category": "web_development",
            "tags": ["one", "two"],
            "reading_time_minutes": 4,
            "published": true,
            "published_at": "2026-02-11T09:00:00Z",
            "views": views,
            "seo_title": null,
            "seo_description": null,
            "ai_generated": false,
            "trending_score": 40,
            "created_at": "2026-02-09T15:20:00Z",
            "updated_at": "2026-02-11T09:00:00Z"
        })
    }

    fn collection(server_uri: &str) -> PostCollection {
        BackendClient::new(server_uri, "eyJtest-key").unwrap().posts()
    }

    #[tokio::test]
    async fn list_published_filters_and_orders() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/blog_posts"))
            .and(query_param("published", "eq.true"))
            .and(query_param("order", "published_at.desc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                post_json("p2", "newer", 10),
                post_json("p1", "older", 99),
            ])))
            .mount(&server)
            .await;

        let posts = collection(&server.uri()).list_published().await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].slug.0, "newer");
    }

    #[tokio::test]
    async fn get_by_slug_miss_is_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/blog_posts"))
            .and(query_param("slug", "eq.no-such-post"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let found = collection(&server.uri())
            .get_by_slug("no-such-post")
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn get_by_slug_single_match_is_some() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/blog_posts"))
            .and(query_param("slug", "eq.a-post"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([post_json("p1", "a-post", 7)])),
            )
            .mount(&server)
            .await;

        let found = collection(&server.uri())
            .get_by_slug("a-post")
            .await
            .unwrap()
            .expect("post exists");
        assert_eq!(found.id.0, "p1");
    }

    #[tokio::test]
    async fn get_by_slug_ambiguity_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rest/v1/blog_posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                post_json("p1", "dup", 1),
                post_json("p2", "dup", 2),
            ])))
            .mount(&server)
            .await;

        let err = collection(&server.uri()).get_by_slug("dup").await.unwrap_err();
        assert!(err.to_string().contains("unique"), "got: {err}");
    }

    #[tokio::test]
    async fn create_returns_server_assigned_record() {
        use lumeo_core::types::{BlogCategory, NewPost, Slug};

        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/v1/blog_posts"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!([post_json("p-new", "fresh-post", 0)])),
            )
            .mount(&server)
            .await;

        let new_post = NewPost {
            slug: Slug("fresh-post".into()),
            title: "Fresh Post".into(),
            excerpt: "Short.".into(),
            content: "Body.".into(),
            author: "Marcus Webb".into(),
            category: BlogCategory::DigitalStrategy,
            tags: vec![],
            reading_time_minutes: 3,
            published: false,
            published_at: None,
            seo_title: None,
            seo_description: None,
            ai_generated: false,
            trending_score: 0,
        };
        let created = collection(&server.uri()).create(new_post).await.unwrap();
        assert_eq!(created.id.0, "p-new");
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        use lumeo_core::types::PostPatch;

        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/rest/v1/blog_posts"))
            .and(query_param("id", "eq.ghost"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let patch = PostPatch {
            published: Some(true),
            ..Default::default()
        };
        let err = collection(&server.uri())
            .update(&PostId("ghost".into()), patch)
            .await
            .unwrap_err();
        assert!(matches!(err, LumeoError::NotFound { .. }), "got: {err:?}");
    }

    #[tokio::test]
    async fn delete_succeeds_when_a_row_was_removed() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/rest/v1/blog_posts"))
            .and(query_param("id", "eq.p1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([post_json("p1", "gone", 0)])),
            )
            .mount(&server)
            .await;

        collection(&server.uri())
            .delete(&PostId("p1".into()))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn increment_views_calls_the_dedicated_function() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/rest/v1/rpc/increment_post_views"))
            .and(body_json(serde_json::json!({ "post_id": "p1" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(43)))
            .expect(1)
            .mount(&server)
            .await;

        let views = collection(&server.uri())
            .increment_views(&PostId("p1".into()))
            .await
            .unwrap();
        assert_eq!(views, 43);
    }

    #[tokio::test]
    async fn increment_views_raises_by_exactly_one_per_call() {
        let server = MockServer::start().await;

        // Scripted counter: two calls, two consecutive values.
        Mock::given(method("POST"))
            .and(path("/rest/v1/rpc/increment_post_views"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(1)))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/rest/v1/rpc/increment_post_views"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(2)))
            .mount(&server)
            .await;

        let posts = collection(&server.uri());
        let first = posts.increment_views(&PostId("p1".into())).await.unwrap();
        let second = posts.increment_views(&PostId("p1".into())).await.unwrap();
        assert_eq!(second, first + 1);
    }
}
