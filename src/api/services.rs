service_client! {
    /// AWS Batch.
    Batch, BlockingBatch, batch {
        cancel_job => CANCEL_JOB,
        create_compute_environment => CREATE_COMPUTE_ENVIRONMENT,
        create_job_queue => CREATE_JOB_QUEUE,
        create_scheduling_policy => CREATE_SCHEDULING_POLICY,
        delete_compute_environment => DELETE_COMPUTE_ENVIRONMENT,
        delete_job_queue => DELETE_JOB_QUEUE,
        delete_scheduling_policy => DELETE_SCHEDULING_POLICY,
        deregister_job_definition => DEREGISTER_JOB_DEFINITION,
        describe_compute_environments => DESCRIBE_COMPUTE_ENVIRONMENTS,
        describe_job_definitions => DESCRIBE_JOB_DEFINITIONS,
        describe_job_queues => DESCRIBE_JOB_QUEUES,
        describe_jobs => DESCRIBE_JOBS,
        describe_scheduling_policies => DESCRIBE_SCHEDULING_POLICIES,
        list_jobs => LIST_JOBS,
        list_scheduling_policies => LIST_SCHEDULING_POLICIES,
        list_tags_for_resource => LIST_TAGS_FOR_RESOURCE,
        register_job_definition => REGISTER_JOB_DEFINITION,
        submit_job => SUBMIT_JOB,
        tag_resource => TAG_RESOURCE,
        terminate_job => TERMINATE_JOB,
        untag_resource => UNTAG_RESOURCE,
        update_compute_environment => UPDATE_COMPUTE_ENVIRONMENT,
        update_job_queue => UPDATE_JOB_QUEUE,
        update_scheduling_policy => UPDATE_SCHEDULING_POLICY,
    }
}

service_client! {
    /// Amazon CloudSearch configuration API.
    CloudSearch, BlockingCloudSearch, cloudsearch {
        build_suggesters => BUILD_SUGGESTERS,
        create_domain => CREATE_DOMAIN,
        define_analysis_scheme => DEFINE_ANALYSIS_SCHEME,
        define_expression => DEFINE_EXPRESSION,
        define_index_field => DEFINE_INDEX_FIELD,
        define_suggester => DEFINE_SUGGESTER,
        delete_analysis_scheme => DELETE_ANALYSIS_SCHEME,
        delete_domain => DELETE_DOMAIN,
        delete_expression => DELETE_EXPRESSION,
        delete_index_field => DELETE_INDEX_FIELD,
        delete_suggester => DELETE_SUGGESTER,
        describe_analysis_schemes => DESCRIBE_ANALYSIS_SCHEMES,
        describe_availability_options => DESCRIBE_AVAILABILITY_OPTIONS,
        describe_domain_endpoint_options => DESCRIBE_DOMAIN_ENDPOINT_OPTIONS,
        describe_domains => DESCRIBE_DOMAINS,
        describe_expressions => DESCRIBE_EXPRESSIONS,
        describe_index_fields => DESCRIBE_INDEX_FIELDS,
        describe_scaling_parameters => DESCRIBE_SCALING_PARAMETERS,
        describe_service_access_policies => DESCRIBE_SERVICE_ACCESS_POLICIES,
        describe_suggesters => DESCRIBE_SUGGESTERS,
        index_documents => INDEX_DOCUMENTS,
        list_domain_names => LIST_DOMAIN_NAMES,
        update_availability_options => UPDATE_AVAILABILITY_OPTIONS,
        update_domain_endpoint_options => UPDATE_DOMAIN_ENDPOINT_OPTIONS,
        update_scaling_parameters => UPDATE_SCALING_PARAMETERS,
        update_service_access_policies => UPDATE_SERVICE_ACCESS_POLICIES,
    }
}

service_client! {
    /// Amazon MemoryDB.
    MemoryDb, BlockingMemoryDb, memorydb {
        batch_update_cluster => BATCH_UPDATE_CLUSTER,
        copy_snapshot => COPY_SNAPSHOT,
        create_acl => CREATE_ACL,
        create_cluster => CREATE_CLUSTER,
        create_parameter_group => CREATE_PARAMETER_GROUP,
        create_snapshot => CREATE_SNAPSHOT,
        create_subnet_group => CREATE_SUBNET_GROUP,
        create_user => CREATE_USER,
        delete_acl => DELETE_ACL,
        delete_cluster => DELETE_CLUSTER,
        delete_parameter_group => DELETE_PARAMETER_GROUP,
        delete_snapshot => DELETE_SNAPSHOT,
        delete_subnet_group => DELETE_SUBNET_GROUP,
        delete_user => DELETE_USER,
        describe_acls => DESCRIBE_ACLS,
        describe_clusters => DESCRIBE_CLUSTERS,
        describe_engine_versions => DESCRIBE_ENGINE_VERSIONS,
        describe_events => DESCRIBE_EVENTS,
        describe_parameter_groups => DESCRIBE_PARAMETER_GROUPS,
        describe_parameters => DESCRIBE_PARAMETERS,
        describe_snapshots => DESCRIBE_SNAPSHOTS,
        describe_subnet_groups => DESCRIBE_SUBNET_GROUPS,
        describe_users => DESCRIBE_USERS,
        failover_shard => FAILOVER_SHARD,
        list_tags => LIST_TAGS,
        tag_resource => TAG_RESOURCE,
        untag_resource => UNTAG_RESOURCE,
        update_cluster => UPDATE_CLUSTER,
        update_user => UPDATE_USER,
    }
}

service_client! {
    /// AWS Systems Manager Incident Manager Contacts.
    SsmContacts, BlockingSsmContacts, ssm_contacts {
        accept_page => ACCEPT_PAGE,
        activate_contact_channel => ACTIVATE_CONTACT_CHANNEL,
        create_contact => CREATE_CONTACT,
        create_contact_channel => CREATE_CONTACT_CHANNEL,
        deactivate_contact_channel => DEACTIVATE_CONTACT_CHANNEL,
        delete_contact => DELETE_CONTACT,
        delete_contact_channel => DELETE_CONTACT_CHANNEL,
        describe_engagement => DESCRIBE_ENGAGEMENT,
        describe_page => DESCRIBE_PAGE,
        get_contact => GET_CONTACT,
        get_contact_channel => GET_CONTACT_CHANNEL,
        get_contact_policy => GET_CONTACT_POLICY,
        list_contact_channels => LIST_CONTACT_CHANNELS,
        list_contacts => LIST_CONTACTS,
        list_engagements => LIST_ENGAGEMENTS,
        list_page_receipts => LIST_PAGE_RECEIPTS,
        list_pages_by_contact => LIST_PAGES_BY_CONTACT,
        list_pages_by_engagement => LIST_PAGES_BY_ENGAGEMENT,
        list_tags_for_resource => LIST_TAGS_FOR_RESOURCE,
        put_contact_policy => PUT_CONTACT_POLICY,
        send_activation_code => SEND_ACTIVATION_CODE,
        start_engagement => START_ENGAGEMENT,
        stop_engagement => STOP_ENGAGEMENT,
        tag_resource => TAG_RESOURCE,
        untag_resource => UNTAG_RESOURCE,
        update_contact => UPDATE_CONTACT,
        update_contact_channel => UPDATE_CONTACT_CHANNEL,
    }
}

service_client! {
    /// AWS IoT Events.
    IotEvents, BlockingIotEvents, iotevents {
        create_alarm_model => CREATE_ALARM_MODEL,
        create_detector_model => CREATE_DETECTOR_MODEL,
        create_input => CREATE_INPUT,
        delete_alarm_model => DELETE_ALARM_MODEL,
        delete_detector_model => DELETE_DETECTOR_MODEL,
        delete_input => DELETE_INPUT,
        describe_alarm_model => DESCRIBE_ALARM_MODEL,
        describe_detector_model => DESCRIBE_DETECTOR_MODEL,
        describe_detector_model_analysis => DESCRIBE_DETECTOR_MODEL_ANALYSIS,
        describe_input => DESCRIBE_INPUT,
        describe_logging_options => DESCRIBE_LOGGING_OPTIONS,
        get_detector_model_analysis_results => GET_DETECTOR_MODEL_ANALYSIS_RESULTS,
        list_alarm_model_versions => LIST_ALARM_MODEL_VERSIONS,
        list_alarm_models => LIST_ALARM_MODELS,
        list_detector_model_versions => LIST_DETECTOR_MODEL_VERSIONS,
        list_detector_models => LIST_DETECTOR_MODELS,
        list_inputs => LIST_INPUTS,
        list_tags_for_resource => LIST_TAGS_FOR_RESOURCE,
        put_logging_options => PUT_LOGGING_OPTIONS,
        start_detector_model_analysis => START_DETECTOR_MODEL_ANALYSIS,
        tag_resource => TAG_RESOURCE,
        untag_resource => UNTAG_RESOURCE,
        update_alarm_model => UPDATE_ALARM_MODEL,
        update_detector_model => UPDATE_DETECTOR_MODEL,
        update_input => UPDATE_INPUT,
    }
}

service_client! {
    /// AWS Elemental MediaConvert.
    MediaConvert, BlockingMediaConvert, mediaconvert {
        associate_certificate => ASSOCIATE_CERTIFICATE,
        cancel_job => CANCEL_JOB,
        create_job => CREATE_JOB,
        create_job_template => CREATE_JOB_TEMPLATE,
        create_preset => CREATE_PRESET,
        create_queue => CREATE_QUEUE,
        delete_job_template => DELETE_JOB_TEMPLATE,
        delete_policy => DELETE_POLICY,
        delete_preset => DELETE_PRESET,
        delete_queue => DELETE_QUEUE,
        describe_endpoints => DESCRIBE_ENDPOINTS,
        disassociate_certificate => DISASSOCIATE_CERTIFICATE,
        get_job => GET_JOB,
        get_job_template => GET_JOB_TEMPLATE,
        get_policy => GET_POLICY,
        get_preset => GET_PRESET,
        get_queue => GET_QUEUE,
        list_job_templates => LIST_JOB_TEMPLATES,
        list_jobs => LIST_JOBS,
        list_presets => LIST_PRESETS,
        list_queues => LIST_QUEUES,
        list_tags_for_resource => LIST_TAGS_FOR_RESOURCE,
        put_policy => PUT_POLICY,
        tag_resource => TAG_RESOURCE,
        untag_resource => UNTAG_RESOURCE,
        update_job_template => UPDATE_JOB_TEMPLATE,
        update_preset => UPDATE_PRESET,
        update_queue => UPDATE_QUEUE,
    }
}

service_client! {
    /// Amazon Managed Service for Prometheus.
    Amp, BlockingAmp, amp {
        create_alert_manager_definition => CREATE_ALERT_MANAGER_DEFINITION,
        create_logging_configuration => CREATE_LOGGING_CONFIGURATION,
        create_rule_groups_namespace => CREATE_RULE_GROUPS_NAMESPACE,
        create_workspace => CREATE_WORKSPACE,
        delete_alert_manager_definition => DELETE_ALERT_MANAGER_DEFINITION,
        delete_logging_configuration => DELETE_LOGGING_CONFIGURATION,
        delete_rule_groups_namespace => DELETE_RULE_GROUPS_NAMESPACE,
        delete_workspace => DELETE_WORKSPACE,
        describe_alert_manager_definition => DESCRIBE_ALERT_MANAGER_DEFINITION,
        describe_logging_configuration => DESCRIBE_LOGGING_CONFIGURATION,
        describe_rule_groups_namespace => DESCRIBE_RULE_GROUPS_NAMESPACE,
        describe_workspace => DESCRIBE_WORKSPACE,
        list_rule_groups_namespaces => LIST_RULE_GROUPS_NAMESPACES,
        list_tags_for_resource => LIST_TAGS_FOR_RESOURCE,
        list_workspaces => LIST_WORKSPACES,
        put_alert_manager_definition => PUT_ALERT_MANAGER_DEFINITION,
        put_rule_groups_namespace => PUT_RULE_GROUPS_NAMESPACE,
        tag_resource => TAG_RESOURCE,
        untag_resource => UNTAG_RESOURCE,
        update_logging_configuration => UPDATE_LOGGING_CONFIGURATION,
        update_workspace_alias => UPDATE_WORKSPACE_ALIAS,
    }
}
