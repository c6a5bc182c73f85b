//! Domain layer for the storefront services.
//!
//! This crate provides:
//! - The order aggregate with its derived total and status tag
//! - `OrderService`, the order lifecycle engine (create, read, list,
//!   status update, delete) on top of a `RecordStore`
//! - User and product records with their CRUD services

pub mod order;
pub mod product;
pub mod user;

pub use order::{
    CreateOrder, LineItem, Order, OrderError, OrderService, OrderStatus, OwnerId,
    ParsePolicyError, ProductId, TransitionPolicy, UpdateOrder,
};
pub use product::{CreateProduct, Product, ProductError, ProductService, UpdateProduct};
pub use user::{CreateUser, UpdateUser, User, UserError, UserService};
