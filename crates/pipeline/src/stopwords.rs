//! Fixed English stop-word list used by the TF-IDF tokenizer.
//!
//! Function words carry no similarity signal for plot text, so they are
//! dropped before term counting. The list is sorted so membership checks
//! can use binary search.

/// Sorted list of English function words excluded from the vocabulary.
pub static STOP_WORDS: &[&str] = &[
    "about", "above", "across", "after", "again", "against", "all", "almost", "alone", "along",
    "already", "also", "although", "always", "am", "among", "an", "and", "another", "any",
    "anyone", "anything", "anywhere", "are", "around", "as", "at", "back", "be", "became",
    "because", "become", "becomes", "been", "before", "behind", "being", "below", "between",
    "both", "but", "by", "can", "cannot", "could", "did", "do", "does", "doing", "down",
    "during", "each", "either", "else", "enough", "etc", "even", "ever", "every", "everyone",
    "everything", "everywhere", "few", "find", "first", "for", "former", "from", "further",
    "had", "has", "have", "having", "he", "hence", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "however", "if", "in", "indeed", "instead", "into", "is", "it",
    "its", "itself", "just", "last", "latter", "least", "less", "many", "may", "me",
    "meanwhile", "might", "mine", "more", "moreover", "most", "mostly", "much", "must", "my",
    "myself", "namely", "neither", "never", "nevertheless", "next", "no", "nobody", "none",
    "nor", "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one",
    "only", "onto", "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out",
    "over", "own", "per", "perhaps", "rather", "same", "see", "seem", "seemed", "seeming",
    "seems", "several", "she", "should", "since", "so", "some", "somehow", "someone",
    "something", "sometime", "sometimes", "somewhere", "still", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "thence", "there", "thereafter",
    "thereby", "therefore", "therein", "these", "they", "this", "those", "though", "through",
    "throughout", "thus", "to", "together", "too", "toward", "towards", "under", "until",
    "up", "upon", "us", "very", "was", "we", "well", "were", "what", "whatever", "when",
    "whence", "whenever", "where", "whereas", "wherever", "whether", "which", "while", "who",
    "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without", "would",
    "yet", "you", "your", "yours", "yourself", "yourselves",
];

/// Membership test against the fixed stop-word list.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.binary_search(&token).is_ok()
}
