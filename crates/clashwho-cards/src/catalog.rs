//! Static card data for each topic.

/// Clash Royale art files, one per card.
pub(crate) const CLASH_ROYALE_FILES: &[&str] = &[
    // troops
    "Knight.png",
    "Archers.png",
    "Giant.png",
    "Musketeer.png",
    "MiniPekka.png",
    "Valkyrie.png",
    "HogRider.png",
    "BabyDragon.png",
    "Prince.png",
    "Witch.png",
    "SkeletonArmy.png",
    "Balloon.png",
    "Wizard.png",
    "Golem.png",
    "Pekka.png",
    "LavaHound.png",
    "MegaKnight.png",
    "Miner.png",
    "Princess.png",
    "IceWizard.png",
    "ElectroWizard.png",
    "InfernoDragon.png",
    "Lumberjack.png",
    "Bandit.png",
    "NightWitch.png",
    "RoyalGhost.png",
    "MagicArcher.png",
    "RamRider.png",
    "Sparky.png",
    "MegaMinion.png",
    "Minions.png",
    "MinionHorde.png",
    "Goblins.png",
    "SpearGoblins.png",
    "GoblinGang.png",
    "Bats.png",
    "Skeletons.png",
    "FireSpirit.png",
    "IceSpirit.png",
    "ElectroSpirit.png",
    "HealSpirit.png",
    "Bomber.png",
    "Barbarians.png",
    "EliteBarbarians.png",
    "RoyalGiant.png",
    "DarkPrince.png",
    "Guards.png",
    "Hunter.png",
    "Executioner.png",
    "Bowler.png",
    "GiantSkeleton.png",
    "ElectroDragon.png",
    "RoyalHogs.png",
    "Zappies.png",
    "Rascals.png",
    "CannonCart.png",
    "FlyingMachine.png",
    "BattleRam.png",
    "GoblinGiant.png",
    "ElixirGolem.png",
    "BattleHealer.png",
    "Firecracker.png",
    "SkeletonDragons.png",
    "MotherWitch.png",
    "ArcherQueen.png",
    "GoldenKnight.png",
    "SkeletonKing.png",
    "MightyMiner.png",
    "Monk.png",
    "Phoenix.png",
    "LittlePrince.png",
    "EvoKnight.png",
    "EvoArchers.png",
    "EvoBarbarians.png",
    "EvoBats.png",
    // spells
    "Arrows.png",
    "Fireball.png",
    "Zap.png",
    "TheLog.png",
    "Rocket.png",
    "Lightning.png",
    "Poison.png",
    "Freeze.png",
    "Rage.png",
    "Mirror.png",
    "Clone.png",
    "Tornado.png",
    "Graveyard.png",
    "Earthquake.png",
    "BarbarianBarrel.png",
    "GiantSnowball.png",
    "RoyalDelivery.png",
    "GoblinBarrel.png",
    "Void.png",
    "GoblinCurse.png",
    "EvoZap.png",
    // buildings
    "Cannon.png",
    "Tesla.png",
    "InfernoTower.png",
    "BombTower.png",
    "Mortar.png",
    "XBow.png",
    "Tombstone.png",
    "GoblinHut.png",
    "Furnace.png",
    "BarbarianHut.png",
    "ElixirCollector.png",
    "GoblinCage.png",
    "GoblinDrill.png",
];

/// Ids of Clash Royale cards that are spells.
pub(crate) const CLASH_ROYALE_SPELLS: &[&str] = &[
    "arrows",
    "fireball",
    "zap",
    "the-log",
    "rocket",
    "lightning",
    "poison",
    "freeze",
    "rage",
    "mirror",
    "clone",
    "tornado",
    "graveyard",
    "earthquake",
    "barbarian-barrel",
    "giant-snowball",
    "royal-delivery",
    "goblin-barrel",
    "void",
    "goblin-curse",
    "evo-zap",
];

/// Ids of Clash Royale cards that are buildings.
pub(crate) const CLASH_ROYALE_BUILDINGS: &[&str] = &[
    "cannon",
    "tesla",
    "inferno-tower",
    "bomb-tower",
    "mortar",
    "x-bow",
    "tombstone",
    "goblin-hut",
    "furnace",
    "barbarian-hut",
    "elixir-collector",
    "goblin-cage",
    "goblin-drill",
];

/// Celebrities topic: `(id, name)`; art is `/images/celebrities/<id>.jpg`.
pub(crate) const CELEBRITIES: &[(&str, &str)] = &[
    ("ada-lovelace", "Ada Lovelace"),
    ("albert-einstein", "Albert Einstein"),
    ("amelia-earhart", "Amelia Earhart"),
    ("beyonce", "Beyoncé"),
    ("charlie-chaplin", "Charlie Chaplin"),
    ("cleopatra", "Cleopatra"),
    ("david-bowie", "David Bowie"),
    ("frida-kahlo", "Frida Kahlo"),
    ("freddie-mercury", "Freddie Mercury"),
    ("lionel-messi", "Lionel Messi"),
    ("marie-curie", "Marie Curie"),
    ("marilyn-monroe", "Marilyn Monroe"),
    ("michael-jordan", "Michael Jordan"),
    ("muhammad-ali", "Muhammad Ali"),
    ("nelson-mandela", "Nelson Mandela"),
    ("oprah-winfrey", "Oprah Winfrey"),
    ("pele", "Pelé"),
    ("rihanna", "Rihanna"),
    ("serena-williams", "Serena Williams"),
    ("shakira", "Shakira"),
    ("taylor-swift", "Taylor Swift"),
    ("usain-bolt", "Usain Bolt"),
    ("william-shakespeare", "William Shakespeare"),
    ("zendaya", "Zendaya"),
];
