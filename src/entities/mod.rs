//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod category;
pub mod discount;
pub mod feedback;
pub mod lecture;
pub mod manufacturer;
pub mod product;
pub mod product_image;
pub mod product_review;
pub mod project;
pub mod subscriber;

// Re-export specific types to avoid conflicts
pub use category::{Entity as Category, Model as CategoryModel};
pub use discount::{Entity as Discount, Model as DiscountModel};
pub use feedback::{Entity as Feedback, Model as FeedbackModel};
pub use lecture::{Entity as Lecture, Model as LectureModel};
pub use manufacturer::{Entity as Manufacturer, Model as ManufacturerModel};
pub use product::{Entity as Product, Model as ProductModel};
pub use product_image::{Entity as ProductImage, Model as ProductImageModel};
pub use product_review::{Entity as ProductReview, Model as ProductReviewModel};
pub use project::{Entity as Project, Model as ProjectModel};
pub use subscriber::{Entity as Subscriber, Model as SubscriberModel};
