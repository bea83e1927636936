mod index;
mod meta;
