pub mod cart_items;
pub mod carts;
pub mod collections;
pub mod contact_messages;
pub mod customers;
pub mod faqs;
pub mod products;
pub mod sections;
pub mod varieties;

pub use cart_items::Entity as CartItems;
pub use carts::Entity as Carts;
pub use collections::Entity as Collections;
pub use contact_messages::Entity as ContactMessages;
pub use customers::Entity as Customers;
pub use faqs::Entity as Faqs;
pub use products::Entity as Products;
pub use sections::Entity as Sections;
pub use varieties::Entity as Varieties;
