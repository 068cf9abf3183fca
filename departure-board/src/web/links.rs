//! Train details URL generation.

/// Relative path of the train details page.
const TRAIN_DETAILS_PAGE: &str = "train-details.html";

/// Link to the train details page for a train ID.
///
/// The ID is percent-encoded; an empty ID still produces a link.
///
/// # Example
///
/// ```
/// use departure_board::web::train_details_url;
///
/// assert_eq!(train_details_url("1234M"), "train-details.html?trainId=1234M");
/// assert_eq!(train_details_url("a b/c"), "train-details.html?trainId=a%20b%2Fc");
/// ```
pub fn train_details_url(train_id: &str) -> String {
    format!(
        "{}?trainId={}",
        TRAIN_DETAILS_PAGE,
        urlencoding::encode(train_id)
    )
}
