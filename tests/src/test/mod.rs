mod concurrent;
mod payload;
