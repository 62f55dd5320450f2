//! GraphQL 路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /graphql | POST | 查询与变更 |
//! | /graphql | GET | GraphiQL 页面 (ENABLE_PLAYGROUND=true 时) |

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    response::{Html, IntoResponse},
    routing::{get, post},
};

use crate::core::ServerState;
use crate::graphql::StaffSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

pub fn router(enable_playground: bool) -> Router<ServerState> {
    if enable_playground {
        Router::new().route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
    } else {
        Router::new().route(GRAPHQL_PATH, post(graphql_handler))
    }
}

async fn graphql_handler(
    Extension(schema): Extension<StaffSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
