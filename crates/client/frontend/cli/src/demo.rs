//! Built-in battle command menu.

use menu_core::{BuildError, MenuConfig, MenuNode};

const WHITE_MAGIC: [&str; 18] = [
    "Cure", "Cura", "Curaga", "Life", "Holy", "Ultima", "Esuna", "Basuna", "Haste", "Slow",
    "Blink", "Mini", "Shell", "Wall", "Sap", "Fog", "Fear", "Warp",
];

const BLACK_MAGIC: [&str; 35] = [
    "Fire", "Fira", "Firaga", "Thunder", "Thundara", "Thundaga", "Blizzard", "Blizzara",
    "Blizzaga", "Quake", "Quake2", "Quake3", "HalfLife", "HalfLife2", "HalfLife3", "Bio", "Bio2",
    "Bio3", "Demi", "Demi2", "Demi23", "Drain", "Osmose", "Sleep", "Stun", "Stop", "Confuse",
    "Blind", "Curse", "Toad", "Break", "Death", "Berserk", "Aura", "Flare",
];

/// `(name, enabled)`
const ITEMS: [(&str, bool); 6] = [
    ("Potion", true),
    ("Ether", true),
    ("Elixir", true),
    ("SleepBag", false),
    ("Tent", false),
    ("Cottage", false),
];

/// Builds the classic battle menu: commands, two spell books and items.
pub fn battle_menu(config: &MenuConfig) -> Result<MenuNode, BuildError> {
    let padding = config.padding;
    let mut root = MenuNode::root();
    root.set_table(1, 4).set_padding(padding);
    root.get_or_create_child("Attack").set_id(1000);
    root.get_or_create_child("Magic")
        .set_table(1, 2)
        .set_padding(padding);
    root.get_or_create_child("Defend").set_id(1002);
    root.get_or_create_child("Items")
        .set_table(2, 4)
        .set_padding(padding);
    root.get_or_create_child("Escape").set_id(1003);

    let magic = root.get_or_create_child("Magic");
    let white = magic.get_or_create_child("White");
    white.set_table(3, 6).set_padding(padding);
    for (id, spell) in (4001..).zip(WHITE_MAGIC) {
        white.get_or_create_child(spell).set_id(id);
    }

    let black = magic.get_or_create_child("Black");
    black.set_table(3, 4).set_padding(padding);
    for (id, spell) in (5001..).zip(BLACK_MAGIC) {
        black
            .get_or_create_child(spell)
            .set_id(id)
            .set_enabled(spell != "HalfLife3");
    }

    let items = root.get_or_create_child("Items");
    for (id, (item, enabled)) in (3001..).zip(ITEMS) {
        items.get_or_create_child(item).set_id(id).set_enabled(enabled);
    }

    root.build()?;
    Ok(root)
}
