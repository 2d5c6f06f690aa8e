//! Curated variant groups: recolors, ornament kits, charge and degradation states.
//!
//! Some ids appear in more than one group. The registry resolves those at build
//! time according to its [`DuplicatePolicy`](crate::DuplicatePolicy).

use super::VariantGroupDef;

/// Builtin group table in declaration order.
pub static BUILTIN_GROUPS: &[VariantGroupDef] = &[
	VariantGroupDef::new(
		"Graceful Hood",
		&[
			11850, 13579, 13591, 13603, 13615, 13627, 13667, 21061, 24743, 25069,
			30045,
		],
	),
	VariantGroupDef::new(
		"Graceful Cape",
		&[
			11852, 13581, 13593, 13605, 13617, 13629, 13669, 21063, 24745, 25071,
			30047,
		],
	),
	VariantGroupDef::new(
		"Graceful Top",
		&[
			11854, 13583, 13595, 13607, 13619, 13631, 13671, 21065, 24747, 25073,
			30049,
		],
	),
	VariantGroupDef::new(
		"Graceful Legs",
		&[
			11856, 13585, 13597, 13609, 13621, 13633, 13673, 21067, 24749, 25075,
			30051,
		],
	),
	VariantGroupDef::new(
		"Graceful Gloves",
		&[
			11858, 13587, 13599, 13611, 13623, 13635, 13675, 21069, 24751, 25077,
			30053,
		],
	),
	VariantGroupDef::new(
		"Graceful Boots",
		&[
			11860, 13589, 13601, 13613, 13625, 13637, 13677, 21071, 24753, 25079,
			30055,
		],
	),
	VariantGroupDef::new(
		"Slayer Helmet (all colors and imbued variants)",
		&[
			11864, 11865, 19639, 19641, 19643, 19645, 19647, 19649, 19651, 19653,
			21264, 21266, 21888, 21890, 23073, 23075, 24370, 24444, 25898, 25900,
			25904, 25906, 25910, 25912, 25177, 25179, 25181, 25183, 25185, 25187,
			25189, 25191, 26674, 26675, 26676, 26677, 26678, 26679, 26680, 26681,
			26682, 26683,
		],
	),
	VariantGroupDef::new("Armadyl godsword", &[11802, 20368]),
	VariantGroupDef::new("Bandos godsword", &[11804, 20370]),
	VariantGroupDef::new("Saradomin godsword", &[11806, 20372]),
	VariantGroupDef::new("Zamorak godsword", &[11808, 20374]),
	VariantGroupDef::new("Amulet of fury", &[6585, 12436]),
	VariantGroupDef::new("Amulet of torture", &[19553, 20366]),
	VariantGroupDef::new("Necklace of anguish", &[19547, 22249]),
	VariantGroupDef::new("Tormented bracelet", &[19544, 23444]),
	VariantGroupDef::new("Occult necklace", &[12002, 19720]),
	VariantGroupDef::new("Berserker necklace", &[11128, 23240]),
	VariantGroupDef::new("Berserker ring", &[6737, 11773, 27306]),
	VariantGroupDef::new("Archers ring", &[6733, 11771, 27304]),
	VariantGroupDef::new("Seers ring", &[6731, 11770, 27303]),
	VariantGroupDef::new("Warrior ring", &[6735, 11772, 27305]),
	VariantGroupDef::new("Treasonous ring", &[12601, 12694, 27308]),
	VariantGroupDef::new("Tyrannical ring", &[12603, 12692, 27307]),
	VariantGroupDef::new("Ring of the gods", &[12605, 13202, 27309]),
	VariantGroupDef::new("Ring of wealth", &[2572, 12785]),
	VariantGroupDef::new("Dragon scimitar", &[4587, 20000]),
	VariantGroupDef::new("Dragon defender", &[12954, 19722]),
	VariantGroupDef::new("Rune defender", &[8850, 23230]),
	VariantGroupDef::new("Dragon boots", &[11840, 22234]),
	VariantGroupDef::new("Dragon chainbody", &[3140, 12414]),
	VariantGroupDef::new("Dragon platebody", &[21892, 22242]),
	VariantGroupDef::new("Dragon full helm", &[11335, 12417]),
	VariantGroupDef::new("Dragon platelegs", &[4087, 12415]),
	VariantGroupDef::new("Dragon plateskirt", &[4585, 12416]),
	VariantGroupDef::new("Dragon sq shield", &[1187, 12418]),
	VariantGroupDef::new("Dragon kiteshield", &[22002, 22244]),
	VariantGroupDef::new("Abyssal Whip", &[4151, 12773, 12774]),
	VariantGroupDef::new("Dark Bow", &[11235, 12765, 12766, 12767, 12768]),
	VariantGroupDef::new("Dragon pickaxe", &[11920, 12797, 23677, 13243, 23680]),
	VariantGroupDef::new("Dragon axe", &[6739, 12807, 23673, 13241, 23675]),
	VariantGroupDef::new("Dragon harpoon", &[21028, 21031, 23762, 21033, 23764]),
	VariantGroupDef::new("Prospector Kit", &[12013, 25549]),
	VariantGroupDef::new("Prospector jacket", &[12014, 25551]),
	VariantGroupDef::new("Prospector legs", &[12015, 25553]),
	VariantGroupDef::new("Prospector boots", &[12016, 25555]),
	VariantGroupDef::new("Infinity hat", &[6918, 12457, 12419]),
	VariantGroupDef::new("Infinity top", &[6916, 12458, 12420]),
	VariantGroupDef::new("Infinity bottoms", &[6924, 12459, 12421]),
	VariantGroupDef::new("Ancestral hat", &[21018, 24664]),
	VariantGroupDef::new("Ancestral robe top", &[21021, 24666]),
	VariantGroupDef::new("Ancestral robe bottom", &[21024, 24668]),
	VariantGroupDef::new("Void knight top", &[8839, 13072]),
	VariantGroupDef::new("Void knight robe", &[8840, 13073]),
	VariantGroupDef::new("Saradomin cape", &[2412, 21791]),
	VariantGroupDef::new("Zamorak cape", &[2413, 21795]),
	VariantGroupDef::new("Guthix cape", &[2414, 21793]),
	VariantGroupDef::new("Salve Amulet", &[4081, 10588, 12017, 12018]),
	VariantGroupDef::new(
		"Black Mask",
		&[
			8901, 8903, 8905, 8907, 8909, 8911, 8913, 8915, 8917, 8919,
			8921, 8923, 11784, 11774,
		],
	),
	VariantGroupDef::new("Rune Scimitar", &[1333, 23330, 23332, 23334]),
	VariantGroupDef::new("Granite Maul", &[4153, 12848]),
	VariantGroupDef::new("Odium/Malediction Wards", &[11926, 12807]),
	VariantGroupDef::new("Malediction ward", &[11924, 12806]),
	VariantGroupDef::new("Steam/Lava Battlestaff", &[11787, 12795]),
	VariantGroupDef::new("Lava battlestaff", &[11789, 21198]),
	VariantGroupDef::new("Mystic Robes (Shattered Relics)", &[4089, 23047]),
	VariantGroupDef::new("Mystic robe top", &[4091, 23050]),
	VariantGroupDef::new("Mystic robe bottom", &[4093, 23053]),
	VariantGroupDef::new("Mystic gloves", &[4095, 23056]),
	VariantGroupDef::new("Mystic boots", &[4097, 23059]),
	VariantGroupDef::new("Cannon (Shattered Relics)", &[6, 23028]),
	VariantGroupDef::new("Cannon stand", &[8, 23031]),
	VariantGroupDef::new("Cannon barrels", &[10, 23034]),
	VariantGroupDef::new("Cannon furnace", &[12, 23037]),
	VariantGroupDef::new("Toxic Blowpipe", &[12924, 12926, 28688]),
	VariantGroupDef::new("Dinh's Bulwark", &[21015, 28690]),
	VariantGroupDef::new("Fighter Torso", &[10551, 27018]),
	VariantGroupDef::new("Avernic Defender", &[22322, 28697]),
	VariantGroupDef::new("Ring of suffering", &[19550, 19710, 20657, 27310]),
	VariantGroupDef::new("Granite ring", &[21739, 21752]),
	VariantGroupDef::new("Magic Shortbow", &[861, 12788]),
	VariantGroupDef::new("Serpentine Helms", &[12929, 12931, 13196, 13197, 13198, 13199]),
	VariantGroupDef::new("Ghrazi rapier", &[22324, 25734]),
	VariantGroupDef::new("Scythe of vitur", &[22325, 22486, 25736, 25738, 25740, 25742]),
	VariantGroupDef::new("Sanguinesti staff", &[22323, 22481, 25731, 25733]),
	VariantGroupDef::new("Rune crossbow", &[9185, 23601]),
	VariantGroupDef::new("Dragon crossbow", &[21902, 28689]),
	VariantGroupDef::new("Dragon hunter crossbow", &[21012, 28700, 28703]),
	VariantGroupDef::new("Heavy Ballista", &[19481, 28701]),
	VariantGroupDef::new("Tzhaar Weapons", &[6528, 23600]),
	VariantGroupDef::new("Abyssal Tentacle", &[12006, 28699]),
	VariantGroupDef::new("Elder Maul", &[21003, 27655]),
	VariantGroupDef::new("Osmumten's Fang", &[26219, 27246]),
	VariantGroupDef::new("Neitiznot Helm", &[10828, 28593]),
	VariantGroupDef::new("Elidinis' Ward", &[25985, 27251]),
	VariantGroupDef::new("Tumeken's Shadow", &[27275, 27277]),
	VariantGroupDef::new("Venator Bow", &[27610, 27612, 29925]),
	VariantGroupDef::new("Torva full helm", &[26382, 28254]),
	VariantGroupDef::new("Torva platebody", &[26384, 28256]),
	VariantGroupDef::new("Torva platelegs", &[26386, 28258]),
	VariantGroupDef::new("Masori mask", &[27226, 27229, 30033]),
	VariantGroupDef::new("Masori body", &[27232, 27235, 30035]),
	VariantGroupDef::new("Masori chaps", &[27238, 27241, 30037]),
	VariantGroupDef::new("Elder Chaos Robes", &[21792, 29610]),
	VariantGroupDef::new("Elder chaos top", &[21795, 29612]),
	VariantGroupDef::new("Elder chaos robe", &[21798, 29614]),
	VariantGroupDef::new("Void Ornament Kit", &[8842, 27698]),
	VariantGroupDef::new("Void knight melee helm", &[11663, 27700]),
	VariantGroupDef::new("Void knight ranger helm", &[11664, 27702]),
	VariantGroupDef::new("Max cape fire/infernal", &[13329, 21285]),
	VariantGroupDef::new("Max cape assembler", &[22109, 28785]),
	VariantGroupDef::new("Crystal Equipment (Gauntlet)", &[23886, 23887, 23888]),
	VariantGroupDef::new("Crystal body (basic)", &[23889, 23890, 23891]),
	VariantGroupDef::new("Crystal legs (basic)", &[23892, 23893, 23894]),
	VariantGroupDef::new("Ahrim's hood", &[4708, 4856, 4857, 4858, 4859]),
	VariantGroupDef::new("Ahrim's staff", &[4710, 4862, 4863, 4864, 4865]),
	VariantGroupDef::new("Ahrim's robetop", &[4712, 4868, 4869, 4870, 4871]),
	VariantGroupDef::new("Ahrim's robeskirt", &[4714, 4874, 4875, 4876, 4877]),
	VariantGroupDef::new("Dharok's helm", &[4716, 4880, 4881, 4882, 4883]),
	VariantGroupDef::new("Dharok's greataxe", &[4718, 4886, 4887, 4888, 4889]),
	VariantGroupDef::new("Dharok's platebody", &[4720, 4892, 4893, 4894, 4895]),
	VariantGroupDef::new("Dharok's platelegs", &[4722, 4898, 4899, 4900, 4901]),
	VariantGroupDef::new("Guthan's helm", &[4724, 4904, 4905, 4906, 4907]),
	VariantGroupDef::new("Guthan's warspear", &[4726, 4910, 4911, 4912, 4913]),
	VariantGroupDef::new("Guthan's platebody", &[4728, 4916, 4917, 4918, 4919]),
	VariantGroupDef::new("Guthan's chainskirt", &[4730, 4922, 4923, 4924, 4925]),
	VariantGroupDef::new("Karil's coif", &[4732, 4928, 4929, 4930, 4931]),
	VariantGroupDef::new("Karil's crossbow", &[4734, 4934, 4935, 4936, 4937]),
	VariantGroupDef::new("Karil's leathertop", &[4736, 4940, 4941, 4942, 4943]),
	VariantGroupDef::new("Karil's leatherskirt", &[4738, 4946, 4947, 4948, 4949]),
	VariantGroupDef::new("Torag's helm", &[4745, 4952, 4953, 4954, 4955]),
	VariantGroupDef::new("Torag's hammers", &[4747, 4958, 4959, 4960, 4961]),
	VariantGroupDef::new("Torag's platebody", &[4749, 4964, 4965, 4966, 4967]),
	VariantGroupDef::new("Torag's platelegs", &[4751, 4970, 4971, 4972, 4973]),
	VariantGroupDef::new("Verac's helm", &[4753, 4976, 4977, 4978, 4979]),
	VariantGroupDef::new("Verac's flail", &[4755, 4982, 4983, 4984, 4985]),
	VariantGroupDef::new("Verac's brassard", &[4757, 4988, 4989, 4990, 4991]),
	VariantGroupDef::new("Verac's plateskirt", &[4759, 4994, 4995, 4996, 4997]),
	VariantGroupDef::new("Infernal Cape", &[21295, 27016, 24224]),
	VariantGroupDef::new("God Books", &[3840, 26496]),
	VariantGroupDef::new("Unholy book", &[3842, 26498]),
	VariantGroupDef::new("Book of balance", &[3844, 26488]),
	VariantGroupDef::new("Book of war", &[12608, 26494]),
	VariantGroupDef::new("Book of law", &[12610, 26492]),
	VariantGroupDef::new("Book of darkness", &[12612, 26490]),
	VariantGroupDef::new("Bracelet of ethereum", &[21816, 21817]),
	VariantGroupDef::new("Ring of endurance", &[24736, 24844]),
	VariantGroupDef::new("Celestial ring", &[25539, 25541]),
	VariantGroupDef::new("Pharaoh's sceptre", &[26945, 26948, 26950]),
	VariantGroupDef::new("Craw's bow", &[22547, 22550]),
	VariantGroupDef::new("Thammaron's sceptre", &[22552, 22555]),
	VariantGroupDef::new("Viggora's chainmace", &[22542, 22545]),
	VariantGroupDef::new("Arclight/Darklight", &[6746, 19675, 30305]),
	VariantGroupDef::new("Fire cape locked", &[6570, 24223, 27014, 13329]),
	VariantGroupDef::new("Void knight top locked", &[8839, 13072, 24177]),
	VariantGroupDef::new("Base max cape and god", &[13280, 13331, 13333, 13335, 21776, 21780, 21784]),
	VariantGroupDef::new("Accumulator/Assembler max capes", &[10499, 22109, 13337, 22109]),
	VariantGroupDef::new("Mythical max cape", &[22114, 24855]),
	VariantGroupDef::new("Explorer's ring", &[13125, 13126, 13127, 13128]),
	VariantGroupDef::new("Ardougne cloak", &[13121, 13122, 13123, 13124]),
	VariantGroupDef::new("Desert amulet", &[13133, 13134, 13135, 13136]),
	VariantGroupDef::new("Falador shield", &[13117, 13118, 13119, 13120]),
	VariantGroupDef::new("Fremennik sea boots", &[13129, 13130, 13131, 13132]),
	VariantGroupDef::new("Kandarin headgear", &[13137, 13138, 13139, 13140]),
	VariantGroupDef::new("Karamja gloves", &[11136, 11138, 11140, 13103]),
	VariantGroupDef::new("Morytania legs", &[13112, 13113, 13114, 13115]),
	VariantGroupDef::new("Varrock armour", &[13104, 13105, 13106, 13107]),
	VariantGroupDef::new("Western banner", &[13141, 13142, 13143, 13144]),
	VariantGroupDef::new("Wilderness sword", &[13108, 13109, 13110, 13111]),
	VariantGroupDef::new("Rada's blessing", &[22941, 22943, 22945, 22947]),
	VariantGroupDef::new(
		"Chompy Bird Hats",
		&[
			2978, 2979, 2980, 2981, 2982, 2983, 2984, 2985, 2986, 2987,
			2988, 2989, 2990, 2991, 2992, 2993, 2994, 2995,
		],
	),
	VariantGroupDef::new("Rune Pouch", &[12791, 24416]),
	VariantGroupDef::new("Dragon defender locked", &[12954, 19722, 24143]),
	VariantGroupDef::new("Rune defender locked", &[8850, 23230, 24142]),
	VariantGroupDef::new("Fighter torso locked", &[10551, 27018, 24175]),
	VariantGroupDef::new("Void knight robe locked", &[8840, 13073, 24179, 24180]),
	VariantGroupDef::new("Void knight gloves locked", &[8842, 24182]),
	VariantGroupDef::new("Elite void top locked", &[13072, 24178]),
	VariantGroupDef::new("Imbued/Saturated Heart", &[20724, 27641]),
	VariantGroupDef::new("Trident of the seas", &[11905, 11907, 11908]),
	VariantGroupDef::new("Trident of the swamp", &[12899, 12900]),
	VariantGroupDef::new("Staff Of The Dead", &[11791, 22296, 12902, 12904]),
	VariantGroupDef::new("Amulet Of The Damned", &[12851, 12853]),
	VariantGroupDef::new("Slayer Rings", &[11866, 11867, 11868, 11869, 11870, 11871, 11872, 11873]),
	VariantGroupDef::new("Crystal bow", &[23983, 23985, 24123]),
	VariantGroupDef::new("Crystal shield", &[23991, 23993, 24127]),
	VariantGroupDef::new("Crystal halberd", &[23987, 23989, 24125]),
	VariantGroupDef::new("Blade of saeldor", &[23995, 23997]),
	VariantGroupDef::new("Bow of faerdhinen", &[25862, 25865]),
	VariantGroupDef::new("Amulet Of Glory", &[1704, 1706, 1708, 1710, 1712, 11976, 11978]),
	VariantGroupDef::new("Games Necklace", &[3853, 3855, 3857, 3859, 3861, 3863, 3865, 3867]),
	VariantGroupDef::new("Ring Of Dueling", &[2552, 2554, 2556, 2558, 2560, 2562, 2564, 2566]),
	VariantGroupDef::new("Combat Bracelet", &[11118, 11120, 11122, 11124, 11126, 11128]),
	VariantGroupDef::new("Skills Necklace", &[11105, 11107, 11109, 11111, 11113, 11115]),
	VariantGroupDef::new("Digsite Pendant", &[11190, 11191, 11192, 11193, 11194]),
	VariantGroupDef::new("Necklace Of Passage", &[21146, 21149, 21151, 21153, 21155]),
	VariantGroupDef::new("Burning Amulet", &[21166, 21169, 21171, 21173, 21175]),
	VariantGroupDef::new("Ring Of Returning", &[21129, 21132, 21134, 21136, 21138]),
	VariantGroupDef::new("Amulet Of Glory (T)", &[10354, 10356, 10358, 10360, 10362, 11964, 11966]),
	VariantGroupDef::new("Amulet Of Eternal Glory", &[19707, 1712]),
	VariantGroupDef::new("Enchanted lyre", &[3690, 6125, 6126, 6127, 6128]),
	VariantGroupDef::new("Drakan's medallion", &[22400, 22401]),
	VariantGroupDef::new("Skull sceptre", &[9013, 21273, 9012, 21276]),
	VariantGroupDef::new("Blighted super restores", &[24620, 24623, 24626, 24629]),
	VariantGroupDef::new("Blighted anglerfish", &[24640, 13441]),
	VariantGroupDef::new("Blighted karambwan", &[24650, 3144]),
	VariantGroupDef::new("Blighted manta ray", &[24643, 391]),
	VariantGroupDef::new("Pharaoh's Sceptre", &[9044, 9046, 9048, 9050]),
	VariantGroupDef::new("Zamorakian Hasta/Spear", &[11824, 11889]),
	VariantGroupDef::new("Ancient Staff", &[4675, 22323]),
	VariantGroupDef::new("Seercull", &[6724, 28783]),
	VariantGroupDef::new("Master Wand", &[6914, 28781]),
	VariantGroupDef::new("Mage's Book", &[6889, 28779]),
	VariantGroupDef::new("Rune Cane", &[12373, 28777]),
	VariantGroupDef::new("Dragon Cane", &[12369, 28775]),
	VariantGroupDef::new("Tarnished Locket", &[29959, 29961]),
	VariantGroupDef::new("Pharaoh's Sceptre (Or)", &[26948, 26950, 26952, 26954, 26956]),
	VariantGroupDef::new("Bryophyta's Staff", &[22370, 22368]),
	VariantGroupDef::new("Blue Moon Items", &[28260, 28262]),
	VariantGroupDef::new("Blue moon chestplate (charged)", &[28264, 28266]),
	VariantGroupDef::new("Blue moon tassets (charged)", &[28268, 28270]),
	VariantGroupDef::new("Blue moon spear (charged)", &[28272, 28274]),
	VariantGroupDef::new("Blood Moon Items", &[28276, 28278]),
	VariantGroupDef::new("Blood moon chestplate (charged)", &[28280, 28282]),
	VariantGroupDef::new("Blood moon tassets (charged)", &[28284, 28286]),
	VariantGroupDef::new("Dual macuahuitl (charged)", &[28288, 28290]),
	VariantGroupDef::new("Eclipse Moon Items", &[28292, 28294]),
	VariantGroupDef::new("Eclipse moon chestplate (charged)", &[28296, 28298]),
	VariantGroupDef::new("Eclipse moon tassets (charged)", &[28300, 28302]),
	VariantGroupDef::new("Eclipse atlatl (charged)", &[28304, 28306]),
	VariantGroupDef::new("Tonalztics Of Ralos", &[28316, 28318]),
	VariantGroupDef::new("Sunfire Fanatic", &[28308, 28310, 28312]),
	VariantGroupDef::new("Keris Partisan", &[25977, 25981, 25979, 25983]),
	VariantGroupDef::new("Lightbearer", &[25975, 27253]),
	VariantGroupDef::new("Book Of The Dead", &[25818, 25820]),
	VariantGroupDef::new("Shadow Ancient Sceptre", &[27660, 27258]),
	VariantGroupDef::new("Ancient Godsword", &[26233, 27327]),
	VariantGroupDef::new("Zaryte Crossbow", &[26374, 27329]),
	VariantGroupDef::new("Armadyl Crossbow", &[11785, 23611]),
	VariantGroupDef::new("Bow Of Faerdhinen (C)", &[25867, 25884, 25886, 25888, 25890, 25892]),
	VariantGroupDef::new("Blade Of Saeldor (C)", &[25870, 25872, 25874, 25876, 25878, 25880]),
	VariantGroupDef::new("Twisted Bow", &[20997, 24670, 29939]),
	VariantGroupDef::new("Kodai Wand", &[21006, 29941]),
	VariantGroupDef::new("Inquisitor's Armour", &[24419, 30021]),
	VariantGroupDef::new("Inquisitor's hauberk", &[24420, 30023]),
	VariantGroupDef::new("Inquisitor's plateskirt", &[24421, 30025]),
	VariantGroupDef::new("Inquisitor's mace", &[24417, 30027]),
	VariantGroupDef::new("Nightmare Staff", &[24422, 24424, 24425, 24423]),
	VariantGroupDef::new("Bandos", &[11832, 30007]),
	VariantGroupDef::new("Bandos tassets", &[11834, 30009]),
	VariantGroupDef::new("Bandos boots", &[11836, 30011]),
	VariantGroupDef::new("Armadyl", &[11826, 30001]),
	VariantGroupDef::new("Armadyl chestplate", &[11828, 30003]),
	VariantGroupDef::new("Armadyl chainskirt", &[11830, 30005]),
	VariantGroupDef::new("Spirit Shields", &[12817, 30013]),
	VariantGroupDef::new("Arcane spirit shield", &[12821, 30015]),
	VariantGroupDef::new("Elysian spirit shield", &[12825, 30017]),
	VariantGroupDef::new("Dinhs Blazing", &[21015, 28690, 30019]),
	VariantGroupDef::new("Virtus Robes", &[26241, 30029]),
	VariantGroupDef::new("Virtus robe top", &[26243, 30031]),
	VariantGroupDef::new("Virtus robe legs", &[26245, 30041]),
	VariantGroupDef::new("Dragon Hunter Lance", &[22978, 30039]),
	VariantGroupDef::new("Pharaoh's Sceptre (Uncharged To Charged)", &[26945, 26948]),
	VariantGroupDef::new("Dragonfire Shields", &[11283, 11284]),
	VariantGroupDef::new("Dragonfire ward", &[22002, 22003]),
	VariantGroupDef::new("Ancient wyvern shield", &[21633, 21634]),
	VariantGroupDef::new("Tome Of Fire", &[20714, 20716]),
	VariantGroupDef::new("Tome Of Water", &[25574, 25576]),
	VariantGroupDef::new("Bonecrusher", &[13116, 24480, 24482]),
	VariantGroupDef::new("Ash Sanctifier", &[25566, 25568]),
	VariantGroupDef::new("Soul Bearer", &[22333, 22336]),
	VariantGroupDef::new("Coal Bag", &[12019, 24480]),
	VariantGroupDef::new("Gem Bag", &[12020, 24481]),
	VariantGroupDef::new("Herb Sack", &[13226, 24478]),
	VariantGroupDef::new("Seed Box", &[13639, 24479]),
	VariantGroupDef::new("Log Basket", &[28779, 28780]),
	VariantGroupDef::new("Fish Barrel", &[25582, 25584]),
	VariantGroupDef::new("Forestry Equipment", &[28189, 28194]),
	VariantGroupDef::new("Forestry top", &[28191, 28196]),
	VariantGroupDef::new("Forestry legs", &[28193, 28198]),
	VariantGroupDef::new("Forestry boots", &[28183, 28200]),
	VariantGroupDef::new("Iron/Steel/Mith/Addy/Rune Crossbow (U)", &[9174, 9176, 9177]),
	VariantGroupDef::new("Iron crossbow (u)", &[9177, 9179, 9180]),
	VariantGroupDef::new("Steel crossbow (u)", &[9181, 9183, 9184]),
	VariantGroupDef::new("Mithril crossbow (u)", &[9185, 9187, 9188]),
	VariantGroupDef::new("Adamant crossbow (u)", &[9189, 9191, 9192]),
	VariantGroupDef::new("Rune crossbow (u)", &[9193, 9185]),
	VariantGroupDef::new("Toxic Trident Upgrades", &[22288, 22290, 22292]),
	VariantGroupDef::new("Kraken Tentacle Whip", &[12004, 12006]),
	VariantGroupDef::new("Blessed Sara Sword", &[12804, 12809]),
	VariantGroupDef::new("Dark bow ornament kits", &[20408, 12765, 12766, 12767, 12768]),
	VariantGroupDef::new("Tentacle Pool Items", &[12771, 12773, 4151]),
	VariantGroupDef::new("Miscellania/Etceteria", &[7936, 6465]),
	VariantGroupDef::new("Lunar Equipment", &[9084, 9085, 9086, 9087, 9088]),
	VariantGroupDef::new("Imbued Rings (Emir's Arena)", &[26684, 26685, 26686, 26687, 26688, 26689, 26690]),
	VariantGroupDef::new("Gilded Pickaxe/Axe", &[23276, 11920, 12797]),
	VariantGroupDef::new("Gilded axe", &[23279, 6739, 12807]),
	VariantGroupDef::new("Enchanted Slayer Helm", &[11864, 11865, 25177]),
	VariantGroupDef::new("Pet Morphs (Olmlet)", &[20851, 24486, 24488, 24490]),
	VariantGroupDef::new("Pet Morphs (Snakeling)", &[12921, 12939, 12940, 13178]),
	VariantGroupDef::new("Twisted Relic Hunter (T1, T2, T3) - Hood", &[24413, 24416, 24419]),
	VariantGroupDef::new("Twisted Relic Hunter - Top", &[24414, 24417, 24420]),
	VariantGroupDef::new("Twisted Relic Hunter - Trousers", &[24415, 24418, 24421]),
	VariantGroupDef::new("Trailblazer Relic Hunter (T1, T2, T3) - Hood", &[25044, 25047, 25050]),
	VariantGroupDef::new("Trailblazer Relic Hunter - Top", &[25045, 25048, 25051]),
	VariantGroupDef::new("Trailblazer Relic Hunter - Trousers", &[25046, 25049, 25052]),
	VariantGroupDef::new("Shattered Relic Hunter (T1, T2, T3) - Hood", &[26851, 26854, 26857]),
	VariantGroupDef::new("Shattered Relic Hunter - Top", &[26852, 26855, 26858]),
	VariantGroupDef::new("Shattered Relic Hunter - Trousers", &[26853, 26856, 26859]),
	VariantGroupDef::new("Trailblazer Reloaded Relic Hunter (T1, T2, T3) - Hood", &[28615, 28618, 28621]),
	VariantGroupDef::new("Trailblazer Reloaded Relic Hunter - Top", &[28616, 28619, 28622]),
	VariantGroupDef::new("Trailblazer Reloaded Relic Hunter - Trousers", &[28617, 28620, 28623]),
	VariantGroupDef::new("Raging Echoes Relic Hunter (T1, T2, T3) - Hood", &[29800, 29803, 29806]),
	VariantGroupDef::new("Raging Echoes Relic Hunter - Top", &[29801, 29804, 29807]),
	VariantGroupDef::new("Raging Echoes Relic Hunter - Trousers", &[29802, 29805, 29808]),
	VariantGroupDef::new("Leagues Canes", &[24422, 25053, 26860, 28624, 29809]),
	VariantGroupDef::new("Leagues Banners", &[24410, 25041, 26848, 28612, 29797]),
	VariantGroupDef::new("Trailblazer tool (or) - Dragon pickaxe", &[25063, 25064, 11920, 12797]),
	VariantGroupDef::new("Trailblazer tool (or) - Dragon axe", &[25059, 25060, 6739, 12807]),
	VariantGroupDef::new("Trailblazer tool (or) - Dragon harpoon", &[25061, 25062, 21028, 21031]),
	VariantGroupDef::new("Shattered abyssal whip (or)", &[26865, 4151, 12773, 12774]),
	VariantGroupDef::new("Shattered abyssal tentacle (or)", &[26866, 12006]),
	VariantGroupDef::new("Shattered rune crossbow (or)", &[26867, 9185, 23601]),
	VariantGroupDef::new("Shattered void melee helm", &[26876, 11663]),
	VariantGroupDef::new("Shattered void ranger helm", &[26877, 11664]),
	VariantGroupDef::new("Shattered void mage helm", &[26878, 8842]),
	VariantGroupDef::new("Shattered void knight top", &[26879, 8839, 13072]),
	VariantGroupDef::new("Shattered void knight robe", &[26880, 8840, 13073]),
	VariantGroupDef::new("Shattered void knight gloves", &[26881, 8842]),
	VariantGroupDef::new("Echo Ahrim's robes", &[29810, 4708]),
	VariantGroupDef::new("Echo Ahrim's robetop", &[29811, 4712]),
	VariantGroupDef::new("Echo Ahrim's robeskirt", &[29812, 4714]),
	VariantGroupDef::new("Echo Ahrim's staff", &[29813, 4710]),
	VariantGroupDef::new("Echo Virtus robes", &[29814, 26241]),
	VariantGroupDef::new("Echo Virtus robe top", &[29815, 26243]),
	VariantGroupDef::new("Echo Virtus robe bottom", &[29816, 26245]),
	VariantGroupDef::new("Decorative helms (Red, White, Gold)", &[4071, 4506, 4511]),
	VariantGroupDef::new("Decorative full helms (Red, White, Gold)", &[11898, 11899, 11900]),
	VariantGroupDef::new("Decorative bodies (Red, White, Gold)", &[4069, 4504, 4509]),
	VariantGroupDef::new("Decorative legs (Red, White, Gold)", &[4070, 4505, 4510]),
	VariantGroupDef::new("Decorative skirts (Red, White, Gold)", &[11896, 11897, 11895]),
	VariantGroupDef::new("Decorative shields (Red, White, Gold)", &[4072, 4507, 4512]),
	VariantGroupDef::new("Decorative swords (Red, White, Gold)", &[4068, 4503, 4508]),
	VariantGroupDef::new("Decorative boots (Red, White, Gold)", &[11901, 11902, 11903]),
	VariantGroupDef::new("Castle Wars magic armour", &[4513, 4514, 4515]),
	VariantGroupDef::new("Decorative magic top (red)", &[4516, 4517, 4518]),
	VariantGroupDef::new("Decorative magic robe (red)", &[4519, 4520, 4521]),
	VariantGroupDef::new("Castle Wars ranged armour", &[4522, 4523, 4524]),
	VariantGroupDef::new("Decorative ranged legs (red)", &[4525, 4526, 4527]),
	VariantGroupDef::new("Decorative quiver (red)", &[4528, 4529, 4530]),
	VariantGroupDef::new("Shayzien helm (tiers 1-5)", &[13357, 13361, 13365, 13369, 13373]),
	VariantGroupDef::new("Shayzien body (tiers 1-5)", &[13358, 13362, 13366, 13370, 13374]),
	VariantGroupDef::new("Shayzien greaves (tiers 1-5)", &[13359, 13363, 13367, 13371, 13375]),
	VariantGroupDef::new("Shayzien gloves (tiers 1-5)", &[13360, 13364, 13368, 13372, 13376]),
	VariantGroupDef::new("Shayzien boots (tiers 1-5)", &[13356, 13355, 13354, 13353, 13377]),
	VariantGroupDef::new("Bronze trimmed/gold-trimmed", &[12211, 12221, 1155]),
	VariantGroupDef::new("Bronze platebody (t)", &[12215, 12225, 1117]),
	VariantGroupDef::new("Bronze platelegs (t)", &[12217, 12227, 1075]),
	VariantGroupDef::new("Bronze plateskirt (t)", &[12219, 12229, 1087]),
	VariantGroupDef::new("Bronze kiteshield (t)", &[12213, 12223, 1189]),
	VariantGroupDef::new("Iron trimmed/gold-trimmed", &[12231, 12241, 1153]),
	VariantGroupDef::new("Iron platebody (t)", &[12235, 12245, 1115]),
	VariantGroupDef::new("Iron platelegs (t)", &[12237, 12247, 1067]),
	VariantGroupDef::new("Iron plateskirt (t)", &[12239, 12249, 1081]),
	VariantGroupDef::new("Iron kiteshield (t)", &[12233, 12243, 1191]),
	VariantGroupDef::new("Steel trimmed/gold-trimmed", &[20169, 20172, 1157]),
	VariantGroupDef::new("Steel platebody (t)", &[20178, 20181, 1119]),
	VariantGroupDef::new("Steel platelegs (t)", &[20184, 20187, 1069]),
	VariantGroupDef::new("Steel plateskirt (t)", &[20190, 20193, 1083]),
	VariantGroupDef::new("Steel kiteshield (t)", &[20175, 20196, 1193]),
	VariantGroupDef::new("Black trimmed/gold-trimmed", &[2587, 2595, 1165]),
	VariantGroupDef::new("Black platebody (t)", &[2583, 2591, 1125]),
	VariantGroupDef::new("Black platelegs (t)", &[2585, 2593, 1077]),
	VariantGroupDef::new("Black plateskirt (t)", &[3472, 3473, 1089]),
	VariantGroupDef::new("Black kiteshield (t)", &[2589, 2597, 1195]),
	VariantGroupDef::new("Mithril trimmed/gold-trimmed", &[12283, 12293, 1159]),
	VariantGroupDef::new("Mithril platebody (t)", &[12287, 12297, 1121]),
	VariantGroupDef::new("Mithril platelegs (t)", &[12289, 12299, 1071]),
	VariantGroupDef::new("Mithril plateskirt (t)", &[12291, 12301, 1085]),
	VariantGroupDef::new("Mithril kiteshield (t)", &[12285, 12295, 1197]),
	VariantGroupDef::new("Adamant trimmed/gold-trimmed", &[2605, 2613, 1161]),
	VariantGroupDef::new("Adamant platebody (t)", &[2599, 2607, 1123]),
	VariantGroupDef::new("Adamant platelegs (t)", &[2601, 2609, 1073]),
	VariantGroupDef::new("Adamant plateskirt (t)", &[3474, 3475, 1091]),
	VariantGroupDef::new("Adamant kiteshield (t)", &[2603, 2611, 1199]),
	VariantGroupDef::new("Rune trimmed/gold-trimmed/god", &[2627, 2619, 1163, 2657, 2665, 2673, 12466, 12468, 12470]),
	VariantGroupDef::new("Rune platebody (t)", &[2623, 2615, 1127, 2653, 2661, 2669, 12460, 12462, 12464]),
	VariantGroupDef::new("Rune platelegs (t)", &[2625, 2617, 1079, 2655, 2663, 2671, 12472, 12474, 12476]),
	VariantGroupDef::new("Rune plateskirt (t)", &[3477, 3476, 1093, 2659, 2667, 2675, 12478, 12480, 12482]),
	VariantGroupDef::new("Rune kiteshield (t)", &[2629, 2621, 1201, 2651, 2659, 2677, 12484, 12486, 12488]),
	VariantGroupDef::new("Gilded Armour", &[3481, 1163]),
	VariantGroupDef::new("Gilded platebody", &[3483, 1127]),
	VariantGroupDef::new("Gilded platelegs", &[3485, 1079]),
	VariantGroupDef::new("Gilded plateskirt", &[3488, 1093]),
	VariantGroupDef::new("Gilded kiteshield", &[3486, 1201]),
	VariantGroupDef::new("Gilded med helm", &[12153, 1147]),
	VariantGroupDef::new("Gilded chainbody", &[12155, 1113]),
	VariantGroupDef::new("Gilded sq shield", &[12157, 1185]),
	VariantGroupDef::new("Gilded 2h sword", &[20146, 1319]),
	VariantGroupDef::new("Gilded axe", &[23279, 6739]),
	VariantGroupDef::new("Gilded pickaxe", &[23276, 11920]),
	VariantGroupDef::new("Gilded spade", &[23282, 952]),
	VariantGroupDef::new("3rd age melee", &[10350, 10348, 10346, 10352]),
	VariantGroupDef::new("3rd age range", &[10334, 10330, 10332, 10336]),
	VariantGroupDef::new("3rd age mage", &[10342, 10338, 10340, 10344]),
	VariantGroupDef::new("3rd age weapons", &[12426, 12422, 12424, 12428]),
	VariantGroupDef::new("3rd age druidic", &[23345, 23348, 23351, 23354]),
	VariantGroupDef::new("3rd age tools", &[20011, 20014, 23360]),
	VariantGroupDef::new("Black heraldic", &[7332, 7338, 7344, 7350, 7356]),
	VariantGroupDef::new("Black body (h1)", &[7334, 7340, 7346, 7352, 7358]),
	VariantGroupDef::new("Black shield (h1)", &[7336, 7342, 7348, 7354, 7360]),
	VariantGroupDef::new("Adamant heraldic", &[7362, 7368, 7374, 7380, 7386]),
	VariantGroupDef::new("Adamant body (h1)", &[7364, 7370, 7376, 7382, 7388]),
	VariantGroupDef::new("Adamant shield (h1)", &[7366, 7372, 7378, 7384, 7390]),
	VariantGroupDef::new("Rune heraldic", &[7392, 7398, 7404, 7410, 7416]),
	VariantGroupDef::new("Rune body (h1)", &[7394, 7400, 7406, 7412, 7418]),
	VariantGroupDef::new("Rune shield (h1)", &[7396, 7402, 7408, 7414, 7420]),
	VariantGroupDef::new("Green d'hide trimmed", &[7370, 7372, 1135]),
	VariantGroupDef::new("Green d'hide chaps (t)", &[7378, 7380, 1099]),
	VariantGroupDef::new("Blue d'hide trimmed", &[7374, 7376, 2499]),
	VariantGroupDef::new("Blue d'hide chaps (t)", &[7382, 7384, 2493]),
	VariantGroupDef::new("Red d'hide trimmed", &[2501, 2503, 2501]),
	VariantGroupDef::new("Black d'hide trimmed", &[12381, 12383, 2503]),
	VariantGroupDef::new("Black d'hide chaps (t)", &[12385, 12387, 2497]),
	VariantGroupDef::new("Saradomin blessed d'hide", &[10386, 10388, 10390, 10392, 23195]),
	VariantGroupDef::new("Zamorak blessed d'hide", &[10374, 10376, 10378, 10380, 23192]),
	VariantGroupDef::new("Guthix blessed d'hide", &[10382, 10370, 10372, 10384, 23198]),
	VariantGroupDef::new("Armadyl blessed d'hide", &[12512, 12508, 12510, 12514, 23201]),
	VariantGroupDef::new("Ancient blessed d'hide", &[12494, 12490, 12492, 12496, 23204]),
	VariantGroupDef::new("Bandos blessed d'hide", &[12500, 12502, 12504, 12506, 23207]),
	VariantGroupDef::new("Partyhats", &[1038, 1040, 1042, 1044, 1046, 1048, 13173, 13175, 28614]),
	VariantGroupDef::new("Halloween masks", &[1053, 1055, 1057, 11847]),
	VariantGroupDef::new("Santa hats", &[1050, 12887, 12888]),
	VariantGroupDef::new("Studded Leather (Trimmed)", &[7362, 7364, 1133]),
	VariantGroupDef::new("Studded chaps (t)", &[7366, 7368, 1097]),
	VariantGroupDef::new("Blue wizard trimmed", &[7386, 7388, 579]),
	VariantGroupDef::new("Blue wizard robe (t)", &[7390, 7392, 577]),
	VariantGroupDef::new("Black wizard trimmed", &[7394, 7396, 1011]),
	VariantGroupDef::new("Black wizard robe (t)", &[7398, 7400, 1015]),
	VariantGroupDef::new("Blue elegant", &[10400, 10402, 10420]),
	VariantGroupDef::new("Red elegant", &[10404, 10406, 10422]),
	VariantGroupDef::new("Green elegant", &[10408, 10410, 10424]),
	VariantGroupDef::new("Black elegant", &[10412, 10414]),
	VariantGroupDef::new("White elegant", &[10416, 10418]),
	VariantGroupDef::new("Purple elegant", &[12319, 12321, 12315]),
	VariantGroupDef::new("Pink elegant", &[12323, 12325, 12317]),
	VariantGroupDef::new("Gold elegant", &[12347, 12349, 12351]),
];
