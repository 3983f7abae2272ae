use async_graphql::MergedObject;

use crate::gql::domains::directors::DirectorQuery;
use crate::gql::domains::movies::MovieQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(DirectorQuery, MovieQuery);
