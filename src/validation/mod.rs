//! Request schema validation.

mod requests;

pub use requests::{
    CreateRouteBody, DeleteRouteBody, MessageResponse, RouteCollection, RouteCollectionQuery,
    UpdateRouteBody,
};
