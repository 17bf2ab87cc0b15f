mod client;

pub use client::MongoClient;
