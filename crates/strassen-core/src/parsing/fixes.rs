use crate::model::{Person, PreviousName, StreetRecord};
use std::collections::BTreeMap;

/// Manual fixes for errors in the source data and for special cases that
/// are too rare to be worth handling in the parser.
pub fn apply_manual_fixes(records: &mut BTreeMap<String, StreetRecord>) {
    set_previous(records, "Albring", &[(None, "Albtalstraße"), (Some(1935), "Kolpingstraße")]);
    set_previous(records, "Am Alten Bahnhof", &[(Some(1920), "Bahnhofplatz/Eisenbahnstraße")]);
    set_previous(records, "Am Illwig", &[(Some(1957), "Geranienstraße")]);
    set_previous(records, "Badenwerkstraße", &[(None, "Am Festplatz"), (Some(1964), "Lammstraße")]);
    set_previous(records, "Blumentorstraße", &[(None, "Blumenvorstadt"), (Some(1905), "Blumenstraße")]);
    set_previous(records, "Eichelgasse", &[(Some(1447), "Müllers-/Eichelgäßle"), (None, "Mühlgasse"), (Some(1930), "Mühlstraße")]);
    set_previous(records, "Fasanenplatz", &[(Some(1840), "Fasanenstraße")]);
    set_previous(records, "Freydorfstraße", &[(None, "Grenadierstraße")]);
    set_previous(records, "Gablonzer Straße", &[(None, "Glasweg")]);
    set_previous(records, "Henri-Arnaud-Straße", &[(None, "Schulstraße"), (None, "Zum Vogelsang")]);
    set_previous(records, "Im Fischerweg", &[(None, "s Schiefe Wegle")]);
    set_previous(records, "Karl-Friedrich-Straße", &[(Some(1718), "Carlsgasse"), (Some(1741), "Bärengasse"), (Some(1787), "Schlossgasse"), (None, "Schlossstraße")]);
    set_previous(records, "Marstallstraße", &[(None, "Schlossgasse"), (None, "Schlossplatz"), (None, "Schlossstraße")]);
    set_previous(records, "Moltkestraße", &[(None, "Mühlburger Allee")]);
    set_previous(records, "Ochsentorstraße", &[(Some(1700), "Große Rappengasse"), (None, "Adlerstraße")]);
    set_previous(records, "Pfinztalstraße", &[(None, "Hauptstraße"), (Some(1933), "Adolf-Hitler-Straße")]);
    set_previous(records, "Rathausplatz", &[(None, "Niddaplatz")]);
    set_previous(records, "Reinhold-Frank-Straße", &[(Some(1795), "Kriegsstraße"), (Some(1878), "Westendstraße"), (Some(1943), "Reinhard-Heydrich-Straße"), (Some(1945), "Westendstraße")]);
    set_previous(records, "Rhode-Island-Allee", &[(Some(1953), "Rhode Island Avenue")]);
    set_previous(records, "Ritterstraße", &[(Some(1718), "Alt-Dresen-Gasse"), (None, "Graf Leiningensche Gasse"), (None, "Rittergasse")]);
    set_previous(records, "Rollerstraße", &[(None, "Endtengaß"), (Some(1905), "Kirchstraße")]);
    set_previous(records, "Schlossplatz", &[(None, "Großer/Äußerer Zirkel")]);
    set_previous(records, "Zirkel", &[(None, "Kleiner/Innerer Zirkel")]);
    set_previous(records, "Zunftstraße", &[(None, "Kronengaß"), (None, "Kronenstraße")]);

    rename(records, "Am Schloß Gottesau", "Am Schloss Gottesaue");
    rename(records, "Gerda-Krüger-Nieland", "Gerda-Krüger-Nieland-Straße");
    rename(records, "Henriette_Obermüller-Straße", "Henriette-Obermüller-Straße");

    set_person(records, "Agathenstraße", "Agathe von Baden-Durlach");
    set_person(records, "Englerstraße", "Karl Engler");
    set_person(records, "Erbprinzenstraße", "Karl Ludwig von Baden");
    set_person(records, "Gerda-Krüger-Nieland-Straße", "Gerda Krüger-Nieland");
    set_person(records, "Gritznerstraße", "Max Karl Gritzner");
    set_person(records, "Kaiserstraße", "Wilhelm I.");
    set_person(records, "Karl-Friedrich-Straße", "Karl Friedrich von Baden");
    set_person(records, "Karlstraße", "Karl Ludwig Friedrich von Baden");
    set_person(records, "Laurentiusstraße", "Sankt Laurentius");
    set_person(records, "Luisenstraße", "Luise Marie Elisabeth von Preußen");
    set_person(records, "Markusstraße", "Sankt Markus");
    set_person(records, "Martinstraße", "Sankt Martin");
    set_person(records, "Mendelssohnplatz", "Moses Mendelssohn");
    set_person(records, "Nikolausstraße", "Sankt Nikolaus");
    set_person(records, "Sankt-Florian-Straße", "Sankt Florian");
    set_person(records, "Sepp-Herberger-Weg", "Joseph Herberger");
    set_person(records, "Viktoriastraße", "Viktoria von Baden");

    // Streets named after several people; the record format cannot
    // describe that, so the bogus single-person extraction is dropped.
    for name in [
        "Bernhardstraße",
        "Bertholdstraße",
        "Christofstraße",
        "Curjel-und-Moser-Straße",
        "Eichrodtweg",
        "Gebrüder-Bachert-Straße",
        "Gebrüder-Grimm-Straße",
        "Geschwister-Scholl-Straße",
        "Haid-und-Neu-Straße",
        "Winkler-Dentz-Straße",
    ] {
        clear_person(records, name);
    }
}

fn set_previous(
    records: &mut BTreeMap<String, StreetRecord>,
    name: &str,
    previous: &[(Option<u16>, &str)],
) {
    if let Some(record) = records.get_mut(name) {
        record.previous = previous
            .iter()
            .map(|(year, n)| PreviousName::new(*year, n))
            .collect();
    }
}

fn set_person(records: &mut BTreeMap<String, StreetRecord>, name: &str, person: &str) {
    if let Some(record) = records.get_mut(name) {
        let entry = record.person.get_or_insert_with(Person::default);
        entry.name = Some(person.to_string());
    }
}

fn clear_person(records: &mut BTreeMap<String, StreetRecord>, name: &str) {
    if let Some(record) = records.get_mut(name) {
        record.person = None;
    }
}

fn rename(records: &mut BTreeMap<String, StreetRecord>, from: &str, to: &str) {
    if let Some(mut record) = records.remove(from) {
        record.name = to.to_string();
        records.insert(to.to_string(), record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> StreetRecord {
        StreetRecord {
            name: name.to_string(),
            ..StreetRecord::default()
        }
    }

    #[test]
    fn test_previous_replaced() {
        let mut records = BTreeMap::new();
        records.insert("Albring".to_string(), record("Albring"));

        apply_manual_fixes(&mut records);

        assert_eq!(
            records["Albring"].previous,
            vec![
                PreviousName::new(None, "Albtalstraße"),
                PreviousName::new(Some(1935), "Kolpingstraße"),
            ]
        );
    }

    #[test]
    fn test_rename_moves_record() {
        let mut records = BTreeMap::new();
        records.insert(
            "Am Schloß Gottesau".to_string(),
            record("Am Schloß Gottesau"),
        );

        apply_manual_fixes(&mut records);

        assert!(!records.contains_key("Am Schloß Gottesau"));
        assert_eq!(records["Am Schloss Gottesaue"].name, "Am Schloss Gottesaue");
    }

    #[test]
    fn test_missing_streets_are_ignored() {
        let mut records = BTreeMap::new();
        apply_manual_fixes(&mut records);
        assert!(records.is_empty());
    }

    #[test]
    fn test_multi_person_streets_cleared() {
        let mut records = BTreeMap::new();
        let mut r = record("Geschwister-Scholl-Straße");
        r.person = Some(Person {
            name: Some("Hans Scholl".to_string()),
            birth: Some(1918),
            death: Some(1943),
        });
        records.insert("Geschwister-Scholl-Straße".to_string(), r);

        apply_manual_fixes(&mut records);

        assert!(records["Geschwister-Scholl-Straße"].person.is_none());
    }
}
