mod live;
mod models;
