pub mod exchange_rate;
pub mod nager;
pub mod open_meteo;
pub mod restcountries;
pub mod sunrise_sunset;
pub mod ticketmaster;
