use vidscribe::domain::{extract_info, ExtractedInfo};

#[test]
fn given_empty_text_when_extracting_then_both_fields_absent() {
    assert_eq!(extract_info(""), ExtractedInfo::default());
    assert_eq!(extract_info("   \n "), ExtractedInfo::default());
}

#[test]
fn given_no_matching_phrases_when_extracting_then_both_fields_absent() {
    let info = extract_info("The weather was nice today.");
    assert_eq!(info.name, None);
    assert_eq!(info.location, None);
}

#[test]
fn given_confusable_transcription_when_extracting_then_name_is_corrected() {
    let info = extract_info("Hi, this is me Pyle");
    assert_eq!(info.name.as_deref(), Some("Payal"));
    assert_eq!(info.location, None);
}

#[test]
fn given_all_confusable_spellings_when_extracting_then_canonical_name_returned() {
    for text in [
        "Hello, this is me Pail",
        "Hey, this is me Pyl",
        "My name is Pyle",
    ] {
        let info = extract_info(text);
        assert_eq!(info.name.as_deref(), Some("Payal"), "text: {text}");
    }
}

#[test]
fn given_name_and_location_when_extracting_then_both_captured() {
    let info = extract_info("My name is Rahul and I live in Mumbai");
    assert_eq!(info.name.as_deref(), Some("Rahul"));
    assert_eq!(info.location.as_deref(), Some("Mumbai"));
}

#[test]
fn given_repeated_introductions_when_extracting_then_first_match_wins() {
    let info = extract_info("I am John. I am also a doctor.");
    assert_eq!(info.name.as_deref(), Some("John"));
}

#[test]
fn given_moved_to_phrase_when_extracting_then_location_captured() {
    let info = extract_info("Then I moved to Pune last year.");
    assert_eq!(info.location.as_deref(), Some("Pune"));
}

#[test]
fn given_did_activity_phrase_when_extracting_then_location_captured() {
    let info = extract_info("I did engineering in Delhi.");
    assert_eq!(info.location.as_deref(), Some("Delhi"));
}

#[test]
fn given_location_without_name_when_extracting_then_name_absent() {
    let info = extract_info("I'm from Kolkata, nice to meet you.");
    assert_eq!(info.name, None);
    assert_eq!(info.location.as_deref(), Some("Kolkata"));
}

#[test]
fn given_identical_text_when_extracting_twice_then_results_are_identical() {
    let text = "Hello, my name is Anita and I am from Chennai";
    assert_eq!(extract_info(text), extract_info(text));
}

#[test]
fn given_lowercase_candidate_token_when_extracting_then_not_captured() {
    // Cue words are case-insensitive but the captured token must be a
    // single capitalized word.
    let info = extract_info("my name is rahul");
    assert_eq!(info.name, None);
}
