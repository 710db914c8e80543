pub use fixture::Fixture;

mod fixture;
