use payloads::responses::VoiceClip;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub clip: VoiceClip,
}

/// Plays a voice clip through a data URL, so no separate media endpoint
/// or object-URL lifecycle is needed.
#[function_component]
pub fn VoicePlayer(props: &Props) -> Html {
    let clip = &props.clip;
    let src = format!("data:{};base64,{}", clip.mime_type, clip.data);

    let duration = if clip.duration_seconds >= 60.0 {
        let minutes = (clip.duration_seconds / 60.0) as u32;
        let seconds = (clip.duration_seconds % 60.0) as u32;
        format!("{minutes}:{seconds:02}")
    } else {
        format!("0:{:02}", clip.duration_seconds as u32)
    };

    html! {
        <div class="flex items-center gap-2">
            <audio controls=true {src} class="h-8" />
            <span class="text-xs text-neutral-500 dark:text-neutral-400">
                {duration}
            </span>
        </div>
    }
}
