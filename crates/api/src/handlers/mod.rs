pub mod deck;
pub mod health;
pub mod pages;
