use base64::{Engine as _, engine::general_purpose};
use payloads::responses::VoiceClip;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobEvent, Event, FileReader, MediaRecorder, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};
use yew::prelude::*;

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Called with the encoded clip once a recording is finished.
    pub on_recorded: Callback<VoiceClip>,
    #[prop_or_default]
    pub disabled: bool,
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

/// Records audio from the microphone and hands back a base64-encoded
/// clip. Chunks stream in via `dataavailable` and are assembled when
/// recording stops, so long recordings don't need one giant buffer up
/// front.
#[function_component]
pub fn VoiceRecorder(props: &Props) -> Html {
    let active = use_mut_ref(|| None::<(MediaRecorder, MediaStream)>);
    let chunks: Rc<RefCell<Vec<Blob>>> = use_mut_ref(Vec::new);
    let started_at = use_mut_ref(|| 0.0f64);
    let is_recording = use_state(|| false);
    let error_message = use_state(|| None::<String>);

    let on_start = {
        let active = active.clone();
        let chunks = chunks.clone();
        let started_at = started_at.clone();
        let is_recording = is_recording.clone();
        let error_message = error_message.clone();
        let on_recorded = props.on_recorded.clone();

        Callback::from(move |_: MouseEvent| {
            let active = active.clone();
            let chunks = chunks.clone();
            let started_at = started_at.clone();
            let is_recording = is_recording.clone();
            let error_message = error_message.clone();
            let on_recorded = on_recorded.clone();

            yew::platform::spawn_local(async move {
                error_message.set(None);

                let result = async {
                    let window = web_sys::window()
                        .ok_or_else(|| "no window".to_string())?;
                    let media_devices = window
                        .navigator()
                        .media_devices()
                        .map_err(js_error)?;

                    let constraints = MediaStreamConstraints::new();
                    constraints.set_audio(&JsValue::TRUE);

                    let promise = media_devices
                        .get_user_media_with_constraints(&constraints)
                        .map_err(js_error)?;
                    let stream: MediaStream = JsFuture::from(promise)
                        .await
                        .map_err(js_error)?
                        .unchecked_into();

                    let recorder = MediaRecorder::new_with_media_stream(
                        &stream,
                    )
                    .map_err(js_error)?;

                    chunks.borrow_mut().clear();
                    let ondata = {
                        let chunks = chunks.clone();
                        Closure::wrap(Box::new(move |e: BlobEvent| {
                            if let Some(blob) = e.data() {
                                chunks.borrow_mut().push(blob);
                            }
                        })
                            as Box<dyn FnMut(_)>)
                    };
                    recorder.set_ondataavailable(Some(
                        ondata.as_ref().unchecked_ref(),
                    ));
                    ondata.forget();

                    let onstop = {
                        let chunks = chunks.clone();
                        let started_at = started_at.clone();
                        let on_recorded = on_recorded.clone();
                        let error_message = error_message.clone();
                        let recorder = recorder.clone();
                        Closure::wrap(Box::new(move |_: Event| {
                            let elapsed_ms =
                                js_sys::Date::now() - *started_at.borrow();
                            let mime_type = {
                                let t = recorder.mime_type();
                                if t.is_empty() {
                                    "audio/webm".to_string()
                                } else {
                                    t
                                }
                            };
                            if let Err(e) = finish_recording(
                                &chunks.borrow(),
                                mime_type,
                                (elapsed_ms / 1000.0) as f32,
                                on_recorded.clone(),
                            ) {
                                error_message.set(Some(e));
                            }
                        })
                            as Box<dyn FnMut(_)>)
                    };
                    recorder
                        .set_onstop(Some(onstop.as_ref().unchecked_ref()));
                    onstop.forget();

                    recorder.start().map_err(js_error)?;
                    *started_at.borrow_mut() = js_sys::Date::now();
                    *active.borrow_mut() = Some((recorder, stream));
                    Ok::<(), String>(())
                }
                .await;

                match result {
                    Ok(()) => is_recording.set(true),
                    Err(e) => error_message.set(Some(format!(
                        "Could not start recording: {e}"
                    ))),
                }
            });
        })
    };

    let on_stop = {
        let active = active.clone();
        let is_recording = is_recording.clone();
        let error_message = error_message.clone();

        Callback::from(move |_: MouseEvent| {
            if let Some((recorder, stream)) = active.borrow_mut().take() {
                if let Err(e) = recorder.stop() {
                    error_message.set(Some(js_error(e)));
                }
                // Release the microphone
                for track in stream.get_tracks().iter() {
                    track.unchecked_into::<MediaStreamTrack>().stop();
                }
            }
            is_recording.set(false);
        })
    };

    html! {
        <div class="space-y-2">
            if *is_recording {
                <button
                    type="button"
                    onclick={on_stop}
                    class="px-3 py-2 rounded-md text-sm font-medium text-white
                           bg-red-600 hover:bg-red-700 transition-colors"
                >
                    {"■ Stop recording"}
                </button>
            } else {
                <button
                    type="button"
                    onclick={on_start}
                    disabled={props.disabled}
                    class="px-3 py-2 rounded-md text-sm font-medium
                           text-neutral-700 dark:text-neutral-300
                           border border-neutral-300 dark:border-neutral-600
                           hover:bg-neutral-100 dark:hover:bg-neutral-700
                           disabled:opacity-50 transition-colors"
                >
                    {"🎤 Record voice message"}
                </button>
            }
            if let Some(error) = &*error_message {
                <p class="text-sm text-red-600 dark:text-red-400">{error}</p>
            }
        </div>
    }
}

/// Assemble the recorded chunks into one blob and encode it. The
/// FileReader finishes asynchronously, so the clip is emitted from its
/// onload handler.
fn finish_recording(
    chunks: &[Blob],
    mime_type: String,
    duration_seconds: f32,
    on_recorded: Callback<VoiceClip>,
) -> Result<(), String> {
    let parts = js_sys::Array::new();
    for chunk in chunks {
        parts.push(chunk);
    }
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&mime_type);
    let blob = Blob::new_with_blob_sequence_and_options(&parts, &options)
        .map_err(js_error)?;

    let reader = FileReader::new().map_err(js_error)?;
    let reader_clone = reader.clone();

    let onload = Closure::wrap(Box::new(move |_: Event| {
        let Ok(result) = reader_clone.result() else {
            return;
        };
        let array = js_sys::Uint8Array::new(&result);
        let data = general_purpose::STANDARD.encode(array.to_vec());

        on_recorded.emit(VoiceClip {
            data,
            mime_type: mime_type.clone(),
            duration_seconds,
        });
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.read_as_array_buffer(&blob).map_err(js_error)?;
    onload.forget();
    Ok(())
}
