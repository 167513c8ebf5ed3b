pub mod nominatim_server;
