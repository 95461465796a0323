/// A node of the topic tree with the keywords that vote for it.
///
/// Keywords are word stems matched by substring against the lowercased
/// info text ("dicht" hits "Dichter" and "Gedicht").
pub struct Topic {
    pub path: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

pub const TOPICS: &[Topic] = &[
    Topic {
        path: &["art"],
        keywords: &["kunst", "keramik"],
    },
    Topic {
        path: &["art", "literature"],
        keywords: &["dicht", "schriftsteller", "zwerg", "märchen", "sage", "epos", "mytho"],
    },
    Topic {
        path: &["art", "music"],
        keywords: &["musik", "komponist", "lyrik", "lied"],
    },
    Topic {
        path: &["art", "painting"],
        keywords: &["maler", "zeichner"],
    },
    Topic {
        path: &["economy"],
        keywords: &["volkswirt", "hansa", "hanse", "schiffer", "krämer", "industrie", "zoll"],
    },
    Topic {
        path: &["economy", "company"],
        keywords: &[
            "firma", "brauerei", "unternehm", "gmbh", "co", "kg", "ag", "raffinerie",
            "druckerei", "verlag",
        ],
    },
    Topic {
        path: &["geography"],
        keywords: &["lage", "hafen", "friedhof", "flur", "park", "gewann", "fels", "insel", "äcker"],
    },
    Topic {
        path: &["geography", "building"],
        keywords: &[
            "haus", "gaststätte", "gastwirtschaft", "bahnhof", "bad", "garten", "gärten",
            "erbaut", "schloss", "schule", "burg", "baut", "wiese", "weide", "kirche",
            "kloster", "postamt", "mühle", "ziegelei",
        ],
    },
    Topic {
        path: &["geography", "forest"],
        keywords: &["wald", "wäldle"],
    },
    Topic {
        path: &["geography", "link"],
        keywords: &["straße", "verbindung", "weg", "strecke", "pfad"],
    },
    Topic {
        path: &["geography", "mountain"],
        keywords: &["berg", "gebirg", "erhebung"],
    },
    Topic {
        path: &["geography", "region"],
        keywords: &["heimat", "landschaft", "bundesstaat", "bundesland", "provinz"],
    },
    Topic {
        path: &["geography", "settlement"],
        keywords: &["stadt", "siedlung", "dorf", "ort", "gemeinde"],
    },
    Topic {
        path: &["geography", "water"],
        keywords: &[
            "fluss", "fluß", "bach", "see", "entspringt", "mündet", "kanal", "graben",
            "quell", "brunnen",
        ],
    },
    Topic {
        path: &["humanities", "history"],
        keywords: &["histori"],
    },
    Topic {
        path: &["humanities", "law"],
        keywords: &["jurist", "gericht", "anwalt", "kanzlei"],
    },
    Topic {
        path: &["humanities", "philosophy"],
        keywords: &["philosoph"],
    },
    Topic {
        path: &["military"],
        keywords: &[
            "feldzug", "militär", "soldat", "krieg", "kämpfer", "kampf", "regiment",
            "bataillon", "schlacht", "general",
        ],
    },
    Topic {
        path: &["nature", "animal"],
        keywords: &["insekt", "vogel", "falter", "schmetterling", "marder", "fisch"],
    },
    Topic {
        path: &["nature", "plant"],
        keywords: &[
            "gehölz", "blume", "pflanze", "strauch", "kraut", "getreide", "frucht",
            "staude", "obst", "baum", "bäume",
        ],
    },
    Topic {
        path: &["nobility"],
        keywords: &["geschlecht"],
    },
    Topic {
        path: &["politics"],
        keywords: &[
            "politi", "präsident", "bundeskanzler", "abgeordneter", "stadtrat", "minister",
            "reichstag", "bürgermeister", "bundestag", "sozialis", "schultheiß",
        ],
    },
    Topic {
        path: &["religion"],
        keywords: &[
            "pater", "theolog", "bischof", "priester", "heilig", "religi", "apostel", "gott",
        ],
    },
    Topic {
        path: &["science"],
        keywords: &[
            "mathematik", "physik", "maschinenbau", "geograph", "forsch", "konstru",
            "ingenieur", "erfind",
        ],
    },
    Topic {
        path: &["science", "medicine"],
        keywords: &["medizin", "arzt", "pflege", "krank", "psychia", "pharma"],
    },
    Topic {
        path: &["tribe"],
        keywords: &["stamm"],
    },
];
