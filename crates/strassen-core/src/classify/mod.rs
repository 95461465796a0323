pub mod topics;

use crate::model::StreetRecord;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use topics::TOPICS;

/// Minimal leaf score. Leaf topics scoring below this are pruned and
/// their score folded into the parent topic.
const MIN_LEAF_SCORE: f64 = 1.0;

/// Inverse document frequencies of all topic keywords over a corpus of
/// info texts. A keyword found in many entries contributes less to a
/// single entry's score than a rare one.
pub fn inverse_document_frequencies<'a, I>(docs: I) -> HashMap<&'static str, f64>
where
    I: IntoIterator<Item = &'a str>,
{
    let normalized: Vec<String> = docs.into_iter().map(|d| d.to_lowercase()).collect();

    let mut idfs = HashMap::new();
    for topic in TOPICS {
        for keyword in topic.keywords {
            let n = normalized.iter().filter(|doc| doc.contains(keyword)).count();
            // Keywords absent from the whole corpus keep a neutral weight.
            let idf = if n == 0 { 1.0 } else { 1.0 / n as f64 };
            idfs.insert(*keyword, idf);
        }
    }
    idfs
}

/// Classify an info text against the topic tree.
///
/// Scores every topic by tf-idf of its keywords, then prunes leaf topics
/// scoring below `MIN_LEAF_SCORE` from the deepest level upwards, folding
/// their score into the parent. The surviving topic with the highest
/// score wins; returns its slash-joined path (e.g. "geography/water").
pub fn classify(text: &str, idfs: &HashMap<&'static str, f64>) -> Option<String> {
    let words: Vec<String> = text
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect();

    let mut scores: HashMap<Vec<&'static str>, f64> = HashMap::new();
    for topic in TOPICS {
        let mut score = 0.0;
        for keyword in topic.keywords {
            let tf = words.iter().filter(|w| w.contains(keyword)).count();
            if tf > 0 {
                score += tf as f64 * idfs.get(keyword).copied().unwrap_or(1.0);
            }
        }
        if score > 0.0 {
            scores.insert(topic.path.to_vec(), 1.0 + (1.0 + score).ln());
        }
    }
    if scores.is_empty() {
        return None;
    }

    prune_leaves(&mut scores);

    scores
        .into_iter()
        .max_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.0.cmp(&a.0))
        })
        .map(|(path, _)| path.join("/"))
}

/// Prune underperforming topics level by level, deepest first. A pruned
/// topic with a positive score passes its share on to the parent, so a
/// text weakly matching several subtopics can still settle on the
/// umbrella topic.
fn prune_leaves(scores: &mut HashMap<Vec<&'static str>, f64>) {
    let children = children_per_parent();
    let max_depth = scores.keys().map(|p| p.len()).max().unwrap_or(0);

    for depth in (1..=max_depth).rev() {
        let at_depth: Vec<Vec<&'static str>> = scores
            .keys()
            .filter(|p| p.len() == depth)
            .cloned()
            .collect();
        for path in at_depth {
            let score = scores[&path];
            if score >= MIN_LEAF_SCORE {
                continue;
            }
            if score > 0.0 && depth > 1 {
                let parent = path[..depth - 1].to_vec();
                let siblings = children.get(&parent).copied().unwrap_or(1.0);
                *scores.entry(parent).or_insert(0.0) += score / siblings;
            }
            scores.remove(&path);
        }
    }
}

fn children_per_parent() -> HashMap<Vec<&'static str>, f64> {
    let mut counts: HashMap<Vec<&'static str>, f64> = HashMap::new();
    for topic in TOPICS {
        if topic.path.len() > 1 {
            *counts
                .entry(topic.path[..topic.path.len() - 1].to_vec())
                .or_insert(0.0) += 1.0;
        }
    }
    counts
}

/// Attach the best-matching topic to every record that has info text.
pub fn attach_topics(records: &mut BTreeMap<String, StreetRecord>) {
    let idfs = inverse_document_frequencies(
        records
            .values()
            .map(|r| r.info.as_str())
            .collect::<Vec<_>>(),
    );
    for record in records.values_mut() {
        if !record.info.is_empty() {
            record.topic = classify(&record.info, &idfs);
        }
    }
}
