//! Toast rendering for one-shot notifications.

use leptos::prelude::*;

use crate::state::notice::Notice;

/// Renders nothing when there is no notice.
#[component]
pub fn NoticeToast(notice: Option<Notice>) -> impl IntoView {
    notice.map(|notice| {
        let class = format!("toast toast--{}", notice.kind().as_str());
        view! {
            <div class=class role="status">
                {notice.message()}
            </div>
        }
    })
}
