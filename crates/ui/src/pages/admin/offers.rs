//! Offers tab

use dioxus::prelude::*;
use haven_core::{Collection, RecordId};
use haven_model::{ImageSlot, Offer, OfferDraft};

use super::form::FormCard;
use crate::components::{
    ImageUpload, RecordList, RecordRow, TextArea, TextInput, field_error, price_label,
};
use crate::hooks::{use_collection, use_record_form};
use crate::services::use_services;
use crate::state::APP_STATE;

#[component]
pub fn OffersTab() -> Element {
    let services = use_services();
    let offers = use_collection::<Offer>();
    let mut form = use_record_form::<OfferDraft>();
    let mut draft = form.draft;

    let rows: Vec<RecordRow> = offers.records.iter().filter_map(offer_row).collect();
    let editing = form.editing.read().clone();
    let draft_now = draft.read().clone();
    let errs = form.errors.read().clone();

    rsx! {
        div {
            class: "grid grid-cols-1 xl:grid-cols-2 gap-6 items-start",
            FormCard {
                noun: "offer",
                editing: editing.is_some(),
                saving: *form.saving.read(),
                can_save: !draft_now.image.is_uploading(),
                on_save: move |_| form.save(services.api.clone()),
                on_cancel: move |_| form.reset(),

                TextInput {
                    label: "Title",
                    value: draft_now.title.clone(),
                    required: true,
                    error: field_error(&errs, "title"),
                    on_change: move |v: String| draft.write().title = v,
                }
                TextArea {
                    label: "Description",
                    value: draft_now.description.clone(),
                    rows: 3,
                    required: true,
                    error: field_error(&errs, "description"),
                    on_change: move |v: String| draft.write().description = v,
                }
                div {
                    class: "grid grid-cols-3 gap-4",
                    TextInput {
                        label: "Price",
                        input_type: "number",
                        value: draft_now.price.clone(),
                        required: true,
                        error: field_error(&errs, "price"),
                        on_change: move |v: String| draft.write().price = v,
                    }
                    TextInput {
                        label: "Discount",
                        value: draft_now.discount.clone(),
                        placeholder: "20% off",
                        required: true,
                        error: field_error(&errs, "discount"),
                        on_change: move |v: String| draft.write().discount = v,
                    }
                    TextInput {
                        label: "Valid",
                        value: draft_now.validity.clone(),
                        placeholder: "Until 31 March",
                        required: true,
                        error: field_error(&errs, "validity"),
                        on_change: move |v: String| draft.write().validity = v,
                    }
                }
                ImageUpload {
                    label: "Image",
                    slot: draft_now.image.clone(),
                    error: field_error(&errs, "imageUrl"),
                    on_change: move |slot: ImageSlot| draft.write().image = slot,
                }
            }
            RecordList {
                collection: Collection::Offers,
                rows,
                editing,
                on_edit: move |id: RecordId| {
                    let offer = APP_STATE.read().cache.get::<Offer>(&id);
                    if let Some(offer) = offer {
                        form.edit(id, OfferDraft::from_record(&offer));
                    }
                },
            }
        }
    }
}

fn offer_row(offer: &Offer) -> Option<RecordRow> {
    let subtitle = if offer.discount.is_empty() {
        price_label(offer.price)
    } else {
        format!("{} · {}", offer.discount, price_label(offer.price))
    };
    RecordRow::new(offer.id.as_ref(), offer.title.clone(), subtitle, offer.image_url.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offer_row_subtitle() {
        let mut offer = Offer {
            id: Some(RecordId::new("o1")),
            title: "Winter escape".into(),
            price: Some(199.0),
            ..Default::default()
        };
        assert_eq!(offer_row(&offer).unwrap().subtitle, "$199");

        offer.discount = "20% off".into();
        assert_eq!(offer_row(&offer).unwrap().subtitle, "20% off · $199");
    }
}
