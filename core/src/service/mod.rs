pub mod series_service;
