//! Definition tables compiled into the crate.
//!
//! These cover the common legacy ids. Anything else comes from definition documents
//! applied on top (see [`crate::definitions`]).

mod biomes;
mod blocks;
mod enchantments;
mod entities;
mod items;

use crate::registry::RegistryBuilder;
use log::debug;

pub(crate) fn register_all(builder: &mut RegistryBuilder) {
    blocks::register(builder);
    items::register(builder);
    entities::register(builder);
    biomes::register(builder);
    enchantments::register(builder);
    debug!("built-in definition tables registered");
}
