//! Built-in menu of the restaurant
//!
//! Drinks sit in the low codes, dishes from 100 upwards. A deployment can
//! replace it with a JSON file (see `MenuCatalog::from_json_file`).

/// `(code, name)` pairs, not sorted
pub const DEFAULT_MENU: &[(u32, &str)] = &[
    // Food
    (100, "CARPACCIO DI MANZO"),
    (101, "VITELLO TONNATO"),
    (102, "FORMAGGIO DI CAPRA"),
    (103, "ANTIPASTO DELLA CASA"),
    (104, "CAPRESE DI BUFALA"),
    (105, "BRUSCHETTA CLASSICA"),
    (106, "BRUSCHETTA CAPRESE"),
    (111, "INSALATA TONNO"),
    (112, "INSALATA CAPRICCIOSA"),
    (115, "INSALATA DI POLLO"),
    (116, "INSALATA MISTA"),
    (117, "TARTARE DI MANZO"),
    (118, "TARTARE DI SALMONE"),
    (120, "ZUPPA DI POMODORO"),
    (121, "MINESTRONE"),
    (200, "SPAGHETTI AGLIO OLIO E PEPERONCINO"),
    (201, "PENNE ARRABIATA"),
    (202, "TAGLIATELLE AL RAGÙ"),
    (203, "SPAGHETTI ALLA CARBONARA"),
    (204, "SPAGHETTI DEL PESCATORE"),
    (205, "RISOTTO STRACCIATA DI BUFALA E PORCINI"),
    (206, "GNOCCHI ALLA SORRENTINA"),
    (207, "FILEJA ALLA MONZESE"),
    (208, "RAVIOLI BURRATA"),
    (209, "RAVIOLI PERE E GORGONZOLA"),
    (210, "FILEJA MANZO E RUCOLA"),
    (211, "LASAGNE"),
    (212, "SPAGHETTI AI GAMBERI"),
    (213, "TAGLIATELLE SALMONE"),
    (214, "PENNE ALLA CACCIATORA"),
    (215, "SPAGHETTI PUTTANESCA CON TONNO"),
    (300, "PIZZA MARGHERITA"),
    (301, "PIZZA SALAME"),
    (302, "PIZZA PROSCIUTTO E FUNGHI"),
    (304, "PIZZA PARMIGIANA"),
    (305, "PIZZA SALSICCIA"),
    (306, "PIZZA VEGETARIANA"),
    (307, "PIZZA DIAVOLA"),
    (308, "PIZZA SFIZIOSA"),
    (309, "PIZZA BUFALINA"),
    (310, "PIZZA RUSTICA"),
    (312, "PIZZA LE QUATTRO STAGIONI"),
    (313, "PIZZA QUATTRO FORMAGGI"),
    (314, "PIZZA SALMONE"),
    (315, "PIZZA D'ITALY"),
    (316, "PIZZA ZOLA E PARMA"),
    (317, "PIZZA TONNO E CIPOLLA"),
    (324, "MONATS ANTIPASTI"),
    (325, "MONATS PASTA LA FORMA"),
    (326, "MONATS PASTA DEL MESE 1"),
    (327, "MONATS PASTA DEL MESE 2"),
    (328, "MONATS FISCH"),
    (329, "MONATS FLEISCH"),
    (330, "MONATS DESSERT"),
    (400, "SALTIMBOCCA ALLA ROMANA"),
    (401, "FILETTO ALLA GRIGLIA"),
    (402, "FILETTO AL PEPE VERDE"),
    (403, "POLLO ALLA GRIGLIA"),
    (404, "CARRÉ DI AGNELLO"),
    (405, "ENTRECÔTE DI MANZO"),
    (406, "SALMONE ALLA GRIGLIA"),
    (407, "POLPO ALLA GRIGLIA"),
    (415, "TIRAMISU"),
    (416, "PANNA COTTA"),
    (417, "TORTINO AL CIOCCOLATO"),
    (418, "CRÈME BRÛLÉE"),
    // Drinks
    (1, "APEROL SPRITZ"),
    (2, "CAMPARI SPRITZ"),
    (3, "CAMPARI AMALFI"),
    (4, "PROSECCO"),
    (5, "SARTI SPRITZ"),
    (6, "SARTI LEMON"),
    (7, "LIMONCELLO SPRITZ"),
    (8, "GIN & TONIC"),
    (9, "MARTINI BIANCO"),
    (10, "HUGO"),
    (11, "CRODINO"),
    (12, "LAVANDA SPRITZ"),
    (13, "LIMOADE SPRITZ"),
    (14, "Sauvignon Blanc FLASCHE 0,75l"),
    (15, "Scalabrone FLASCHE 0,75l"),
    (20, "PAULANER PILS 0,3l"),
    (21, "PAULANER PILS 0,5l"),
    (22, "PAULANER WEISSBIER 0,3l"),
    (23, "PAULANER WEISSBIER 0,5l"),
    (26, "RADLER 0,3l"),
    (27, "RADLER 0,5l"),
    (31, "Bruciato FLASCHE 0,75l"),
    (32, "JOHANNISBEERSAFT 0,2l"),
    (33, "JOHANNISBEERSAFT 0,4l"),
    (34, "PAULANER WEISSBIER ALKOHOLFREI 0,5l"),
    (35, "PAULANER HEFEWEIZEN DUNKEL 0,5l"),
    (36, "PAULANER PILS ALKOHOLFREI 0,33l"),
    (40, "AQUA PANNA 0,25l"),
    (41, "AQUA PANNA 0,75l"),
    (42, "SAN PELLEGRINO 0,25l"),
    (43, "SAN PELLEGRINO 0,75l"),
    (44, "BANANENSAFT 0,2l"),
    (45, "BANANENSAFT 0,4l"),
    (46, "ORANGENSAFT 0,2l"),
    (47, "ORANGENSAFT 0,4l"),
    (48, "KIRSCHSAFT 0,2l"),
    (49, "KIRSCHSAFT 0,4l"),
    (50, "APFELSAFT 0,2l"),
    (51, "APFELSAFT 0,4l"),
    (52, "KIBA 0,2l"),
    (53, "KIBA 0,4l"),
    (54, "RHABARBERSAFT 0,2l"),
    (55, "RHABARBERSAFT 0,4l"),
    (56, "ROTWEIN 0,2l"),
    (57, "WEISSWEIN 0,2l"),
    (58, "ROSÉ 0,2l"),
    (59, "FRIZZANTINO 0,2l"),
    (60, "LAMBRUSCO 0,2l"),
    (61, "WEISSWEINSCHORLE 0,2l"),
    (62, "COCA COLA 0,2l"),
    (63, "COCA COLA 0,4l"),
    (64, "SPRITE 0,2l"),
    (65, "SPRITE 0,4l"),
    (66, "FANTA 0,2l"),
    (67, "FANTA 0,4l"),
    (68, "SPEZI 0,2l"),
    (69, "SPEZI 0,4l"),
    (70, "GINGER ALE 0,2l"),
    (71, "GINGER ALE 0,4l"),
    (72, "TONIC WATER 0,2l"),
    (73, "TONIC WATER 0,4l"),
    (74, "BITTER LEMON 0,2l"),
    (75, "BITTER LEMON 0,4l"),
    (80, "PRIMITIVO 0,2l"),
    (81, "CHIANTI CLASSICO 0,2l"),
    (82, "CHARDONNAY 0,2l"),
    (83, "PINOT GRIGIO 0,2l"),
    (85, "Vermentino FLASCHE 0,75l"),
    (86, "Chardonnay FLASCHE 0,75l"),
    (87, "Pinot Grigio FLASCHE 0,75l"),
    (88, "Lagrein Rosé FLASCHE 0,75l"),
    (90, "Chianti Classico FLASCHE 0,75l"),
    (91, "Primitivo FLASCHE 0,75l"),
    (97, "Lagrein Rot FLASCHE 0,75l"),
    (98, "Insoglio FLASCHE 0,75l"),
    (113, "Weissburgunder FLASCHE 0,75l"),
    (409, "AMARO DEL CAPO 2cl"),
    (410, "AMARO DEL CAPO 4cl"),
    (432, "Sodale FLASCHE 0,75l"),
    (500, "CAFFÈ"),
    (501, "CAPPUCCINO"),
    (502, "LATTE MACCHIATO"),
    (503, "ESPRESSO"),
    (504, "ESPRESSO DOPPIO"),
    (505, "ESPRESSO MACCHIATO"),
    (506, "TEE"),
    (507, "GRAPPA 2cl"),
    (508, "GRAPPA 4cl"),
    (509, "LIMONCELLO 2cl"),
    (510, "LIMONCELLO 4cl"),
    (511, "AVERNA 2cl"),
    (512, "AVERNA 4cl"),
    (513, "FERNET-BRANCA 2cl"),
    (514, "FERNET-BRANCA 4cl"),
    (515, "SAMBUCA 2cl"),
    (516, "SAMBUCA 4cl"),
    (517, "Tignanello FLASCHE 0,75l"),
    (519, "RAMAZZOTTI 4cl"),
    (520, "RAMAZZOTTI 2cl"),
];
