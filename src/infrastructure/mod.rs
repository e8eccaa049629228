pub mod refiners;
