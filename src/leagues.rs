//! Static registry of the four English league divisions, 2024-25 season.
//!
//! Each division carries its Wikipedia season page URL and a curated
//! stadium capacity table. The capacity figures are our own data, not
//! scraped; lookups are exact-match on the stadium name.

/// One league division: season page plus curated capacities.
pub struct League {
    pub name: &'static str,
    pub url: &'static str,
    capacities: &'static [(&'static str, u32)],
}

impl League {
    /// Capacity from the curated table. Stadiums missing from the table
    /// report 0 rather than an error; the table is best-effort data.
    pub fn capacity(&self, stadium: &str) -> u32 {
        self.capacities
            .iter()
            .find(|(name, _)| *name == stadium)
            .map(|(_, capacity)| *capacity)
            .unwrap_or(0)
    }
}

/// All divisions in output order, top flight first.
pub fn divisions() -> &'static [League] {
    &DIVISIONS
}

static DIVISIONS: [League; 4] = [
    League {
        name: "Premier League",
        url: "https://en.wikipedia.org/wiki/2024%E2%80%9325_Premier_League",
        capacities: &[
            ("Emirates Stadium", 60704),
            ("Villa Park", 42657),
            ("Vitality Stadium", 11307),
            ("Gtech Community Stadium", 17250),
            ("Falmer Stadium", 31876),
            ("Stamford Bridge", 40341),
            ("Selhurst Park", 25486),
            ("Goodison Park", 39414),
            ("Craven Cottage", 24500),
            ("Portman Road", 29673),
            ("King Power Stadium", 32259),
            ("Anfield", 61276),
            ("City of Manchester Stadium", 52900),
            ("Old Trafford", 74310),
            ("St James' Park", 52305),
            ("City Ground", 30404),
            ("St Mary's Stadium", 32384),
            ("Tottenham Hotspur Stadium", 62850),
            ("London Stadium", 62500),
            ("Molineux Stadium", 31750),
        ],
    },
    League {
        name: "EFL Championship",
        url: "https://en.wikipedia.org/wiki/2024%E2%80%9325_EFL_Championship",
        capacities: &[
            ("Elland Road", 37608),
            ("Stadium of Light", 49000),
            ("Ewood Park", 31367),
            ("Ashton Gate", 27059),
            ("Turf Moor", 21944),
            ("Cardiff City Stadium", 33280),
            ("Coventry Building Society Arena", 32609),
            ("Pride Park Stadium", 32956),
            ("MKM Stadium", 25400),
            ("Kenilworth Road", 12056),
            ("Riverside Stadium", 34742),
            ("The Den", 20146),
            ("Carrow Road", 27244),
            ("Kassam Stadium", 12500),
            ("Home Park", 17900),
            ("Fratton Park", 20899),
            ("Deepdale", 23404),
            ("Loftus Road", 18439),
            ("Bramall Lane", 32050),
            ("bet365 Stadium", 30089),
            ("Swansea.com Stadium", 21088),
            ("Vicarage Road", 22200),
            ("The Hawthorns", 26850),
        ],
    },
    League {
        name: "EFL League One",
        url: "https://en.wikipedia.org/wiki/2024%E2%80%9325_EFL_League_One",
        capacities: &[
            ("Stadium MK", 30500),
            ("Hillsborough", 39859),
            ("Oakwell", 23287),
            ("St Andrew's", 29409),
            ("Bloomfield Road", 16616),
            ("Toughsheet Community Stadium", 28723),
            ("Memorial Stadium", 9832),
            ("Pirelli Stadium", 6912),
            ("Abbey Stadium", 8127),
            ("The Valley", 27111),
            ("Broadfield Stadium", 5996),
            ("St James Park", 8714),
            ("John Smith's Stadium", 24121),
            ("Brisbane Road", 9271),
            ("Sincil Bank", 10669),
            ("Field Mill", 9186),
            ("Sixfields Stadium", 7798),
            ("London Road Stadium", 13511),
            ("Madejski Stadium", 24161),
            ("New York Stadium", 12021),
            ("New Meadow", 9875),
            ("Broadhall Way", 7800),
            ("Edgeley Park", 10852),
            ("DW Stadium", 25138),
            ("Adams Park", 10137),
        ],
    },
    League {
        name: "EFL League Two",
        url: "https://en.wikipedia.org/wiki/2024%E2%80%9325_EFL_League_Two",
        capacities: &[
            ("Vale Park", 19052),
            ("Rodney Parade", 7850),
            ("Crown Ground", 5450),
            ("Plough Lane", 9215),
            ("Holker Street", 5045),
            ("Valley Parade", 25136),
            ("Hayes Lane", 5000),
            ("Brunton Park", 17949),
            ("Whaddon Road", 7066),
            ("SMH Group Stadium", 10504),
            ("Colchester Community Stadium", 10105),
            ("Gresty Road", 10153),
            ("Eco-Power Stadium", 15231),
            ("Highbury Stadium", 5327),
            ("Priestfield Stadium", 11582),
            ("Blundell Park", 9052),
            ("Wetherby Road", 5000),
            ("Stadium MK", 30500),
            ("Mazuma Stadium", 6476),
            ("Meadow Lane", 19841),
            ("Moor Lane", 5108),
            ("County Ground", 15728),
            ("Prenton Park", 16587),
            ("Bescot Stadium", 11300),
        ],
    },
];
