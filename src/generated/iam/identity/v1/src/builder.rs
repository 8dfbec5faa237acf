// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

pub mod iam_identity {
    use crate::Result;
    use gax::response::Response;
    use gaxi::http::{NoBody, ReqwestClient};
    use gaxi::path_parameter::{missing_options, path_segment, required};
    use gaxi::query_parameter::QueryParameter;

    /// A builder for [IamIdentity][crate::client::IamIdentity].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use ibm_cloud_iam_identity_v1::*;
    /// # use builder::iam_identity::ClientBuilder;
    /// # use client::IamIdentity;
    /// # let credentials = auth::credentials::no_auth::Builder::default().build();
    /// let builder: ClientBuilder = IamIdentity::builder();
    /// let client = builder
    ///     .with_endpoint("https://private.iam.cloud.ibm.com")
    ///     .with_credentials(credentials)
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<client::Factory, gaxi::Credentials>;

    pub(crate) mod client {
        use crate::client::IamIdentity;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = IamIdentity;
            type Credentials = gaxi::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::IamIdentity] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        inner: ReqwestClient,
        request: Option<R>,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(inner: ReqwestClient) -> Self {
            Self {
                inner,
                request: Some(R::default()),
                options: gax::options::RequestOptions::default(),
            }
        }

        fn request_mut(&mut self) -> &mut R {
            self.request.get_or_insert_with(R::default)
        }

        fn into_parts(self) -> Result<(ReqwestClient, R, gax::options::RequestOptions)> {
            let request = self.request.ok_or_else(missing_options)?;
            Ok((self.inner, request, self.options))
        }
    }

    fn with_header(
        builder: reqwest::RequestBuilder,
        name: &'static str,
        value: &Option<String>,
    ) -> reqwest::RequestBuilder {
        match value {
            None => builder,
            Some(v) => builder.header(name, v),
        }
    }

    /// The request builder for [IamIdentity::list_api_keys][crate::client::IamIdentity::list_api_keys] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use ibm_cloud_iam_identity_v1::builder;
    /// use builder::iam_identity::ListApiKeys;
    /// # tokio_test::block_on(async {
    /// let builder = prepare_request_builder();
    /// let response = builder.send().await?;
    /// # gax::Result::<()>::Ok(()) });
    ///
    /// fn prepare_request_builder() -> ListApiKeys {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListApiKeys(RequestBuilder<crate::model::ListApiKeysOptions>);

    impl ListApiKeys {
        pub(crate) fn new(inner: ReqwestClient) -> Self {
            Self(RequestBuilder::new(inner))
        }

        /// Sets the full options, replacing any prior values.
        ///
        /// `None` clears the options, and [send][Self::send] fails without
        /// making a request.
        pub fn with_options<V: Into<Option<crate::model::ListApiKeysOptions>>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::ApiKeyList>> {
            let (inner, req, options) = self.0.into_parts()?;
            let builder = inner.builder(reqwest::Method::GET, "/v1/apikeys".to_string())?;
            let builder = req.account_id.add(builder, "account_id");
            let builder = req.iam_id.add(builder, "iam_id");
            let builder = req.pagesize.add(builder, "pagesize");
            let builder = req.pagetoken.add(builder, "pagetoken");
            let builder = req.scope.add(builder, "scope");
            let builder = req.r#type.add(builder, "type");
            let builder = req.sort.add(builder, "sort");
            let builder = req.order.add(builder, "order");
            let builder = req.include_history.add(builder, "include_history");
            inner
                .execute(
                    "ListApiKeys",
                    builder,
                    None::<NoBody>,
                    &req.headers,
                    options,
                )
                .await
        }

        /// Sets the value of [account_id][crate::model::ListApiKeysOptions::account_id].
        pub fn set_account_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().account_id = Some(v.into());
            self
        }

        /// Sets the value of [iam_id][crate::model::ListApiKeysOptions::iam_id].
        pub fn set_iam_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().iam_id = Some(v.into());
            self
        }

        /// Sets the value of [pagesize][crate::model::ListApiKeysOptions::pagesize].
        pub fn set_pagesize<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request_mut().pagesize = Some(v.into());
            self
        }

        /// Sets the value of [pagetoken][crate::model::ListApiKeysOptions::pagetoken].
        pub fn set_pagetoken<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().pagetoken = Some(v.into());
            self
        }

        /// Sets the value of [scope][crate::model::ListApiKeysOptions::scope].
        pub fn set_scope(mut self, v: crate::model::ListApiKeysScope) -> Self {
            self.0.request_mut().scope = Some(v);
            self
        }

        /// Sets the value of [type][crate::model::ListApiKeysOptions::r#type].
        pub fn set_type(mut self, v: crate::model::ListApiKeysType) -> Self {
            self.0.request_mut().r#type = Some(v);
            self
        }

        /// Sets the value of [sort][crate::model::ListApiKeysOptions::sort].
        pub fn set_sort<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().sort = Some(v.into());
            self
        }

        /// Sets the value of [order][crate::model::ListApiKeysOptions::order].
        pub fn set_order(mut self, v: crate::model::ListApiKeysOrder) -> Self {
            self.0.request_mut().order = Some(v);
            self
        }

        /// Sets the value of [include_history][crate::model::ListApiKeysOptions::include_history].
        pub fn set_include_history<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request_mut().include_history = Some(v.into());
            self
        }

        /// Sets the custom headers sent with this request.
        pub fn set_headers<I, K, V>(mut self, v: I) -> Self
        where
            I: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            self.0.request_mut().headers =
                v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListApiKeys {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    #[serde_with::skip_serializing_none]
    #[derive(serde::Serialize)]
    struct CreateApiKeyBody {
        name: Option<String>,
        iam_id: Option<String>,
        description: Option<String>,
        account_id: Option<String>,
        apikey: Option<String>,
        store_value: Option<bool>,
    }

    /// The request builder for [IamIdentity::create_api_key][crate::client::IamIdentity::create_api_key] calls.
    #[derive(Clone, Debug)]
    pub struct CreateApiKey(RequestBuilder<crate::model::CreateApiKeyOptions>);

    impl CreateApiKey {
        pub(crate) fn new(inner: ReqwestClient) -> Self {
            Self(RequestBuilder::new(inner))
        }

        /// Sets the full options, replacing any prior values.
        pub fn with_options<V: Into<Option<crate::model::CreateApiKeyOptions>>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::ApiKey>> {
            let (inner, req, options) = self.0.into_parts()?;
            required(&req.name, "name")?;
            required(&req.iam_id, "iam_id")?;
            let builder = inner.builder(reqwest::Method::POST, "/v1/apikeys".to_string())?;
            let builder = with_header(builder, "Entity-Lock", &req.entity_lock);
            let body = CreateApiKeyBody {
                name: req.name,
                iam_id: req.iam_id,
                description: req.description,
                account_id: req.account_id,
                apikey: req.apikey,
                store_value: req.store_value,
            };
            inner
                .execute("CreateApiKey", builder, Some(body), &req.headers, options)
                .await
        }

        /// Sets the value of [name][crate::model::CreateApiKeyOptions::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().name = Some(v.into());
            self
        }

        /// Sets the value of [iam_id][crate::model::CreateApiKeyOptions::iam_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_iam_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().iam_id = Some(v.into());
            self
        }

        /// Sets the value of [description][crate::model::CreateApiKeyOptions::description].
        pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().description = Some(v.into());
            self
        }

        /// Sets the value of [account_id][crate::model::CreateApiKeyOptions::account_id].
        pub fn set_account_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().account_id = Some(v.into());
            self
        }

        /// Sets the value of [apikey][crate::model::CreateApiKeyOptions::apikey].
        pub fn set_apikey<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().apikey = Some(v.into());
            self
        }

        /// Sets the value of [store_value][crate::model::CreateApiKeyOptions::store_value].
        pub fn set_store_value<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request_mut().store_value = Some(v.into());
            self
        }

        /// Sets the value of [entity_lock][crate::model::CreateApiKeyOptions::entity_lock].
        pub fn set_entity_lock<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().entity_lock = Some(v.into());
            self
        }

        /// Sets the custom headers sent with this request.
        pub fn set_headers<I, K, V>(mut self, v: I) -> Self
        where
            I: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            self.0.request_mut().headers =
                v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateApiKey {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [IamIdentity::get_api_keys_details][crate::client::IamIdentity::get_api_keys_details] calls.
    #[derive(Clone, Debug)]
    pub struct GetApiKeysDetails(RequestBuilder<crate::model::GetApiKeysDetailsOptions>);

    impl GetApiKeysDetails {
        pub(crate) fn new(inner: ReqwestClient) -> Self {
            Self(RequestBuilder::new(inner))
        }

        /// Sets the full options, replacing any prior values.
        pub fn with_options<V: Into<Option<crate::model::GetApiKeysDetailsOptions>>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::ApiKey>> {
            let (inner, req, options) = self.0.into_parts()?;
            let builder =
                inner.builder(reqwest::Method::GET, "/v1/apikeys/details".to_string())?;
            let builder = with_header(builder, "IAM-ApiKey", &req.iam_api_key);
            let builder = req.include_history.add(builder, "include_history");
            inner
                .execute(
                    "GetApiKeysDetails",
                    builder,
                    None::<NoBody>,
                    &req.headers,
                    options,
                )
                .await
        }

        /// Sets the value of [iam_api_key][crate::model::GetApiKeysDetailsOptions::iam_api_key].
        pub fn set_iam_api_key<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().iam_api_key = Some(v.into());
            self
        }

        /// Sets the value of [include_history][crate::model::GetApiKeysDetailsOptions::include_history].
        pub fn set_include_history<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request_mut().include_history = Some(v.into());
            self
        }

        /// Sets the custom headers sent with this request.
        pub fn set_headers<I, K, V>(mut self, v: I) -> Self
        where
            I: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            self.0.request_mut().headers =
                v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetApiKeysDetails {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [IamIdentity::get_api_key][crate::client::IamIdentity::get_api_key] calls.
    #[derive(Clone, Debug)]
    pub struct GetApiKey(RequestBuilder<crate::model::GetOptions>);

    impl GetApiKey {
        pub(crate) fn new(inner: ReqwestClient) -> Self {
            Self(RequestBuilder::new(inner))
        }

        /// Sets the full options, replacing any prior values.
        pub fn with_options<V: Into<Option<crate::model::GetOptions>>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::ApiKey>> {
            let (inner, req, options) = self.0.into_parts()?;
            let id = path_segment(&req.id, "id")?;
            let builder = inner.builder(reqwest::Method::GET, format!("/v1/apikeys/{id}"))?;
            let builder = req.include_history.add(builder, "include_history");
            inner
                .execute("GetApiKey", builder, None::<NoBody>, &req.headers, options)
                .await
        }

        /// Sets the value of [id][crate::model::GetOptions::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().id = Some(v.into());
            self
        }

        /// Sets the value of [include_history][crate::model::GetOptions::include_history].
        pub fn set_include_history<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request_mut().include_history = Some(v.into());
            self
        }

        /// Sets the custom headers sent with this request.
        pub fn set_headers<I, K, V>(mut self, v: I) -> Self
        where
            I: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            self.0.request_mut().headers =
                v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetApiKey {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    #[serde_with::skip_serializing_none]
    #[derive(serde::Serialize)]
    struct UpdateApiKeyBody {
        name: Option<String>,
        description: Option<String>,
    }

    /// The request builder for [IamIdentity::update_api_key][crate::client::IamIdentity::update_api_key] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateApiKey(RequestBuilder<crate::model::UpdateApiKeyOptions>);

    impl UpdateApiKey {
        pub(crate) fn new(inner: ReqwestClient) -> Self {
            Self(RequestBuilder::new(inner))
        }

        /// Sets the full options, replacing any prior values.
        pub fn with_options<V: Into<Option<crate::model::UpdateApiKeyOptions>>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::ApiKey>> {
            let (inner, req, options) = self.0.into_parts()?;
            let id = path_segment(&req.id, "id")?;
            let if_match = required(&req.if_match, "if_match")?;
            let builder = inner
                .builder(reqwest::Method::PUT, format!("/v1/apikeys/{id}"))?
                .header("If-Match", if_match);
            let body = UpdateApiKeyBody {
                name: req.name,
                description: req.description,
            };
            inner
                .execute("UpdateApiKey", builder, Some(body), &req.headers, options)
                .await
        }

        /// Sets the value of [id][crate::model::UpdateApiKeyOptions::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateApiKeyOptions::if_match].
        ///
        /// This is a **required** field for requests.
        pub fn set_if_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().if_match = Some(v.into());
            self
        }

        /// Sets the value of [name][crate::model::UpdateApiKeyOptions::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().name = Some(v.into());
            self
        }

        /// Sets the value of [description][crate::model::UpdateApiKeyOptions::description].
        pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().description = Some(v.into());
            self
        }

        /// Sets the custom headers sent with this request.
        pub fn set_headers<I, K, V>(mut self, v: I) -> Self
        where
            I: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            self.0.request_mut().headers =
                v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateApiKey {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    type Prepared = (
        ReqwestClient,
        reqwest::RequestBuilder,
        crate::model::IdOptions,
        gax::options::RequestOptions,
    );

    /// Defines a request builder for an operation whose only parameter is the
    /// ID in the path.
    macro_rules! id_request_builder {
        ($(#[$meta:meta])* $name:ident, $method:ident, $path:literal, $suffix:literal, $operation_id:literal) => {
            $(#[$meta])*
            #[derive(Clone, Debug)]
            pub struct $name(RequestBuilder<crate::model::IdOptions>);

            impl $name {
                pub(crate) fn new(inner: ReqwestClient) -> Self {
                    Self(RequestBuilder::new(inner))
                }

                /// Sets the full options, replacing any prior values.
                pub fn with_options<V: Into<Option<crate::model::IdOptions>>>(
                    mut self,
                    v: V,
                ) -> Self {
                    self.0.request = v.into();
                    self
                }

                /// Sets all the options, replacing any prior values.
                pub fn with_request_options<V: Into<gax::options::RequestOptions>>(
                    mut self,
                    v: V,
                ) -> Self {
                    self.0.options = v.into();
                    self
                }

                /// Sets the value of [id][crate::model::IdOptions::id].
                ///
                /// This is a **required** field for requests.
                pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
                    self.0.request_mut().id = Some(v.into());
                    self
                }

                /// Sets the custom headers sent with this request.
                pub fn set_headers<I, K, V>(mut self, v: I) -> Self
                where
                    I: IntoIterator<Item = (K, V)>,
                    K: Into<String>,
                    V: Into<String>,
                {
                    self.0.request_mut().headers =
                        v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
                    self
                }

                fn prepare(self) -> Result<Prepared> {
                    let (inner, req, options) = self.0.into_parts()?;
                    let id = path_segment(&req.id, "id")?;
                    let builder = inner.builder(
                        reqwest::Method::$method,
                        format!(concat!($path, "/{}", $suffix), id),
                    )?;
                    Ok((inner, builder, req, options))
                }

                const OPERATION_ID: &'static str = $operation_id;
            }

            #[doc(hidden)]
            impl gax::options::internal::RequestBuilder for $name {
                fn request_options(&mut self) -> &mut gax::options::RequestOptions {
                    &mut self.0.options
                }
            }
        };
    }

    macro_rules! no_content {
        ($name:ident) => {
            impl $name {
                /// Sends the request.
                ///
                /// The operation has no result, the body of the returned
                /// response is always `None`.
                pub async fn send(self) -> Result<Response<()>> {
                    let (inner, builder, req, options) = self.prepare()?;
                    inner
                        .execute_no_content(
                            Self::OPERATION_ID,
                            builder,
                            None::<NoBody>,
                            &req.headers,
                            options,
                        )
                        .await
                }
            }
        };
    }

    macro_rules! with_content {
        ($name:ident, $result:ty) => {
            impl $name {
                /// Sends the request.
                pub async fn send(self) -> Result<Response<$result>> {
                    let (inner, builder, req, options) = self.prepare()?;
                    inner
                        .execute(
                            Self::OPERATION_ID,
                            builder,
                            None::<NoBody>,
                            &req.headers,
                            options,
                        )
                        .await
                }
            }
        };
    }

    id_request_builder!(
        /// The request builder for [IamIdentity::delete_api_key][crate::client::IamIdentity::delete_api_key] calls.
        DeleteApiKey, DELETE, "/v1/apikeys", "", "DeleteApiKey"
    );
    no_content!(DeleteApiKey);

    id_request_builder!(
        /// The request builder for [IamIdentity::lock_api_key][crate::client::IamIdentity::lock_api_key] calls.
        LockApiKey, POST, "/v1/apikeys", "/lock", "LockApiKey"
    );
    no_content!(LockApiKey);

    id_request_builder!(
        /// The request builder for [IamIdentity::unlock_api_key][crate::client::IamIdentity::unlock_api_key] calls.
        UnlockApiKey, DELETE, "/v1/apikeys", "/lock", "UnlockApiKey"
    );
    no_content!(UnlockApiKey);

    id_request_builder!(
        /// The request builder for [IamIdentity::delete_service_id][crate::client::IamIdentity::delete_service_id] calls.
        DeleteServiceId, DELETE, "/v1/serviceids", "", "DeleteServiceID"
    );
    no_content!(DeleteServiceId);

    id_request_builder!(
        /// The request builder for [IamIdentity::lock_service_id][crate::client::IamIdentity::lock_service_id] calls.
        LockServiceId, POST, "/v1/serviceids", "/lock", "LockServiceID"
    );
    with_content!(LockServiceId, crate::model::ServiceId);

    id_request_builder!(
        /// The request builder for [IamIdentity::unlock_service_id][crate::client::IamIdentity::unlock_service_id] calls.
        UnlockServiceId, DELETE, "/v1/serviceids", "/lock", "UnlockServiceID"
    );
    with_content!(UnlockServiceId, crate::model::ServiceId);

    /// The request builder for [IamIdentity::list_service_ids][crate::client::IamIdentity::list_service_ids] calls.
    #[derive(Clone, Debug)]
    pub struct ListServiceIds(RequestBuilder<crate::model::ListServiceIdsOptions>);

    impl ListServiceIds {
        pub(crate) fn new(inner: ReqwestClient) -> Self {
            Self(RequestBuilder::new(inner))
        }

        /// Sets the full options, replacing any prior values.
        pub fn with_options<V: Into<Option<crate::model::ListServiceIdsOptions>>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::ServiceIdList>> {
            let (inner, req, options) = self.0.into_parts()?;
            let builder = inner.builder(reqwest::Method::GET, "/v1/serviceids/".to_string())?;
            let builder = req.account_id.add(builder, "account_id");
            let builder = req.name.add(builder, "name");
            let builder = req.pagesize.add(builder, "pagesize");
            let builder = req.pagetoken.add(builder, "pagetoken");
            let builder = req.sort.add(builder, "sort");
            let builder = req.order.add(builder, "order");
            let builder = req.include_history.add(builder, "include_history");
            inner
                .execute(
                    "ListServiceIds",
                    builder,
                    None::<NoBody>,
                    &req.headers,
                    options,
                )
                .await
        }

        /// Sets the value of [account_id][crate::model::ListServiceIdsOptions::account_id].
        pub fn set_account_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().account_id = Some(v.into());
            self
        }

        /// Sets the value of [name][crate::model::ListServiceIdsOptions::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().name = Some(v.into());
            self
        }

        /// Sets the value of [pagesize][crate::model::ListServiceIdsOptions::pagesize].
        pub fn set_pagesize<T: Into<i64>>(mut self, v: T) -> Self {
            self.0.request_mut().pagesize = Some(v.into());
            self
        }

        /// Sets the value of [pagetoken][crate::model::ListServiceIdsOptions::pagetoken].
        pub fn set_pagetoken<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().pagetoken = Some(v.into());
            self
        }

        /// Sets the value of [sort][crate::model::ListServiceIdsOptions::sort].
        pub fn set_sort<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().sort = Some(v.into());
            self
        }

        /// Sets the value of [order][crate::model::ListServiceIdsOptions::order].
        pub fn set_order(mut self, v: crate::model::ListServiceIdsOrder) -> Self {
            self.0.request_mut().order = Some(v);
            self
        }

        /// Sets the value of [include_history][crate::model::ListServiceIdsOptions::include_history].
        pub fn set_include_history<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request_mut().include_history = Some(v.into());
            self
        }

        /// Sets the custom headers sent with this request.
        pub fn set_headers<I, K, V>(mut self, v: I) -> Self
        where
            I: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            self.0.request_mut().headers =
                v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListServiceIds {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    #[serde_with::skip_serializing_none]
    #[derive(serde::Serialize)]
    struct CreateServiceIdBody {
        account_id: Option<String>,
        name: Option<String>,
        description: Option<String>,
        unique_instance_crns: Option<Vec<String>>,
        apikey: Option<crate::model::CreateApiKeyRequest>,
    }

    /// The request builder for [IamIdentity::create_service_id][crate::client::IamIdentity::create_service_id] calls.
    #[derive(Clone, Debug)]
    pub struct CreateServiceId(RequestBuilder<crate::model::CreateServiceIdOptions>);

    impl CreateServiceId {
        pub(crate) fn new(inner: ReqwestClient) -> Self {
            Self(RequestBuilder::new(inner))
        }

        /// Sets the full options, replacing any prior values.
        pub fn with_options<V: Into<Option<crate::model::CreateServiceIdOptions>>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::ServiceId>> {
            let (inner, req, options) = self.0.into_parts()?;
            required(&req.account_id, "account_id")?;
            required(&req.name, "name")?;
            let builder = inner.builder(reqwest::Method::POST, "/v1/serviceids/".to_string())?;
            let builder = with_header(builder, "Entity-Lock", &req.entity_lock);
            let body = CreateServiceIdBody {
                account_id: req.account_id,
                name: req.name,
                description: req.description,
                unique_instance_crns: req.unique_instance_crns,
                apikey: req.apikey,
            };
            inner
                .execute("CreateServiceID", builder, Some(body), &req.headers, options)
                .await
        }

        /// Sets the value of [account_id][crate::model::CreateServiceIdOptions::account_id].
        ///
        /// This is a **required** field for requests.
        pub fn set_account_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().account_id = Some(v.into());
            self
        }

        /// Sets the value of [name][crate::model::CreateServiceIdOptions::name].
        ///
        /// This is a **required** field for requests.
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().name = Some(v.into());
            self
        }

        /// Sets the value of [description][crate::model::CreateServiceIdOptions::description].
        pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().description = Some(v.into());
            self
        }

        /// Sets the value of [unique_instance_crns][crate::model::CreateServiceIdOptions::unique_instance_crns].
        pub fn set_unique_instance_crns<I, V>(mut self, v: I) -> Self
        where
            I: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.0.request_mut().unique_instance_crns =
                Some(v.into_iter().map(|v| v.into()).collect());
            self
        }

        /// Sets the value of [apikey][crate::model::CreateServiceIdOptions::apikey].
        pub fn set_apikey<T: Into<crate::model::CreateApiKeyRequest>>(mut self, v: T) -> Self {
            self.0.request_mut().apikey = Some(v.into());
            self
        }

        /// Sets the value of [entity_lock][crate::model::CreateServiceIdOptions::entity_lock].
        pub fn set_entity_lock<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().entity_lock = Some(v.into());
            self
        }

        /// Sets the custom headers sent with this request.
        pub fn set_headers<I, K, V>(mut self, v: I) -> Self
        where
            I: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            self.0.request_mut().headers =
                v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateServiceId {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [IamIdentity::get_service_id][crate::client::IamIdentity::get_service_id] calls.
    #[derive(Clone, Debug)]
    pub struct GetServiceId(RequestBuilder<crate::model::GetOptions>);

    impl GetServiceId {
        pub(crate) fn new(inner: ReqwestClient) -> Self {
            Self(RequestBuilder::new(inner))
        }

        /// Sets the full options, replacing any prior values.
        pub fn with_options<V: Into<Option<crate::model::GetOptions>>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::ServiceId>> {
            let (inner, req, options) = self.0.into_parts()?;
            let id = path_segment(&req.id, "id")?;
            let builder = inner.builder(reqwest::Method::GET, format!("/v1/serviceids/{id}"))?;
            let builder = req.include_history.add(builder, "include_history");
            inner
                .execute("GetServiceID", builder, None::<NoBody>, &req.headers, options)
                .await
        }

        /// Sets the value of [id][crate::model::GetOptions::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().id = Some(v.into());
            self
        }

        /// Sets the value of [include_history][crate::model::GetOptions::include_history].
        pub fn set_include_history<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request_mut().include_history = Some(v.into());
            self
        }

        /// Sets the custom headers sent with this request.
        pub fn set_headers<I, K, V>(mut self, v: I) -> Self
        where
            I: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            self.0.request_mut().headers =
                v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetServiceId {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    #[serde_with::skip_serializing_none]
    #[derive(serde::Serialize)]
    struct UpdateServiceIdBody {
        name: Option<String>,
        description: Option<String>,
        unique_instance_crns: Option<Vec<String>>,
    }

    /// The request builder for [IamIdentity::update_service_id][crate::client::IamIdentity::update_service_id] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateServiceId(RequestBuilder<crate::model::UpdateServiceIdOptions>);

    impl UpdateServiceId {
        pub(crate) fn new(inner: ReqwestClient) -> Self {
            Self(RequestBuilder::new(inner))
        }

        /// Sets the full options, replacing any prior values.
        pub fn with_options<V: Into<Option<crate::model::UpdateServiceIdOptions>>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_request_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Response<crate::model::ServiceId>> {
            let (inner, req, options) = self.0.into_parts()?;
            let id = path_segment(&req.id, "id")?;
            let if_match = required(&req.if_match, "if_match")?;
            let builder = inner
                .builder(reqwest::Method::PUT, format!("/v1/serviceids/{id}"))?
                .header("If-Match", if_match);
            let body = UpdateServiceIdBody {
                name: req.name,
                description: req.description,
                unique_instance_crns: req.unique_instance_crns,
            };
            inner
                .execute("UpdateServiceID", builder, Some(body), &req.headers, options)
                .await
        }

        /// Sets the value of [id][crate::model::UpdateServiceIdOptions::id].
        ///
        /// This is a **required** field for requests.
        pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateServiceIdOptions::if_match].
        ///
        /// This is a **required** field for requests.
        pub fn set_if_match<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().if_match = Some(v.into());
            self
        }

        /// Sets the value of [name][crate::model::UpdateServiceIdOptions::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().name = Some(v.into());
            self
        }

        /// Sets the value of [description][crate::model::UpdateServiceIdOptions::description].
        pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request_mut().description = Some(v.into());
            self
        }

        /// Sets the value of [unique_instance_crns][crate::model::UpdateServiceIdOptions::unique_instance_crns].
        pub fn set_unique_instance_crns<I, V>(mut self, v: I) -> Self
        where
            I: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.0.request_mut().unique_instance_crns =
                Some(v.into_iter().map(|v| v.into()).collect());
            self
        }

        /// Sets the custom headers sent with this request.
        pub fn set_headers<I, K, V>(mut self, v: I) -> Self
        where
            I: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            self.0.request_mut().headers =
                v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateServiceId {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}
